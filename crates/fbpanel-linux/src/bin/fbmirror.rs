//! Copy one snapshot of /dev/fb0 onto /dev/fb1.

use std::process::ExitCode;

use anyhow::Context;
use fbpanel::mirror;
use fbpanel_linux::{init_logging, FbDevice};

const SOURCE_PATH: &str = "/dev/fb0";
const DEST_PATH: &str = "/dev/fb1";

fn run() -> anyhow::Result<()> {
    let mut source =
        FbDevice::open_read(SOURCE_PATH).with_context(|| format!("opening {SOURCE_PATH}"))?;
    let mut dest =
        FbDevice::open_write(DEST_PATH).with_context(|| format!("opening {DEST_PATH}"))?;

    mirror(&mut source, &mut dest)
        .with_context(|| format!("mirroring {SOURCE_PATH} to {DEST_PATH}"))?;

    log::info!("Framebuffer successfully copied from {SOURCE_PATH} to {DEST_PATH}");
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
