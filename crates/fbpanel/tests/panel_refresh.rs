//! Framebuffer-to-panel refresh against a recording panel interface.

use std::io::{self, Read};

use embedded_hal::delay::DelayNs;
use fbpanel::{refresh_panel, Error, GeometrySource, ScreenInfo};
use st7789vw::{Builder, FrameTransfer, PanelController, PanelInterface, PanelState};

struct Truecolor {
    info: ScreenInfo,
    data: io::Cursor<Vec<u8>>,
}

impl Truecolor {
    fn new(width: u32, height: u32, pixels: &[[u8; 3]]) -> Self {
        Self {
            info: ScreenInfo {
                width,
                height,
                virtual_width: width,
                virtual_height: height,
                bits_per_pixel: 24,
            },
            data: io::Cursor::new(pixels.concat()),
        }
    }
}

impl GeometrySource for Truecolor {
    fn screen_info(&self) -> io::Result<ScreenInfo> {
        Ok(self.info)
    }
}

impl Read for Truecolor {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.data.read(buf)
    }
}

#[derive(Debug)]
struct Nak;

#[derive(Default)]
struct RecordingPanel {
    sent: Vec<Vec<u8>>,
    resets: usize,
    fail: bool,
}

impl PanelInterface for RecordingPanel {
    type Error = Nak;

    fn write(&mut self, bytes: &[u8]) -> Result<(), Nak> {
        self.sent.push(bytes.to_vec());
        if self.fail {
            Err(Nak)
        } else {
            Ok(())
        }
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) {
        self.resets += 1;
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn per_pixel_panel(interface: RecordingPanel) -> PanelController<RecordingPanel> {
    let config = Builder::new()
        .frame_transfer(FrameTransfer::PerPixel)
        .build()
        .unwrap();
    PanelController::new(interface, config)
}

#[test]
fn refresh_sends_init_then_converted_pixels() {
    let mut source = Truecolor::new(
        2,
        2,
        &[[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]],
    );
    let mut panel = per_pixel_panel(RecordingPanel::default());

    let report = refresh_panel(&mut source, &mut panel, &mut NoDelay).unwrap();

    assert_eq!(report.frame_len, 8);
    assert_eq!(report.warnings, 0);
    assert_eq!(panel.state(), PanelState::FrameDisplayed);

    let interface = panel.release();
    assert_eq!(interface.resets, 1);
    assert_eq!(
        interface.sent,
        vec![
            vec![0x01],
            vec![0x11],
            vec![0x29],
            vec![0x36, 0xC0],
            vec![0x00, 0xF8],
            vec![0xE0, 0x07],
            vec![0x1F, 0x00],
            vec![0xFF, 0xFF],
        ]
    );
}

#[test]
fn refresh_survives_failing_bus() {
    let mut source = Truecolor::new(1, 2, &[[0, 0, 0], [0, 0, 0]]);
    let interface = RecordingPanel {
        fail: true,
        ..RecordingPanel::default()
    };
    let mut panel = per_pixel_panel(interface);

    let report = refresh_panel(&mut source, &mut panel, &mut NoDelay).unwrap();

    // 3 commands + orientation + 2 pixels
    assert_eq!(report.warnings, 6);
    let interface = panel.release();
    assert_eq!(interface.sent[..4], [vec![0x01], vec![0x11], vec![0x29], vec![0x36, 0xC0]]);
}

#[test]
fn short_source_never_touches_panel() {
    let mut source = Truecolor::new(4, 4, &[[1, 2, 3]]);
    let mut panel = per_pixel_panel(RecordingPanel::default());

    let result = refresh_panel(&mut source, &mut panel, &mut NoDelay);

    assert!(matches!(result, Err(Error::ShortRead { expected: 48, actual: 3 })));
    assert_eq!(panel.state(), PanelState::BusReady);
    assert!(panel.release().sent.is_empty());
}

#[test]
fn second_refresh_on_same_controller_is_rejected() {
    let pixels = [[9, 9, 9]; 4];
    let mut panel = per_pixel_panel(RecordingPanel::default());

    refresh_panel(&mut Truecolor::new(2, 2, &pixels), &mut panel, &mut NoDelay).unwrap();
    let result = refresh_panel(&mut Truecolor::new(2, 2, &pixels), &mut panel, &mut NoDelay);

    assert!(matches!(result, Err(Error::Panel(st7789vw::Error::InvalidState { .. }))));
}
