//! Command-line renderer for slide drafts.
//!
//! Loads a draft saved by the slide editor and prints the preview projection
//! as one JSON line per tick, so layouts and countdowns can be checked
//! without a browser.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::{Parser, ValueEnum};
    use slide_preview::state::carousel::CarouselState;
    use slide_preview::state::preview::{DeviceMode, PreviewModel};
    use slide_preview::state::slide::SlideDraft;
    use slide_preview::util::ticker::Ticker;
    use slide_preview::{PreviewConfig, PreviewError};
    use time::OffsetDateTime;
    use tracing::{error, info};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
    enum Device {
        Desktop,
        Mobile,
    }

    impl From<Device> for DeviceMode {
        fn from(device: Device) -> Self {
            match device {
                Device::Desktop => DeviceMode::Desktop,
                Device::Mobile => DeviceMode::Mobile,
            }
        }
    }

    #[derive(Parser, Debug)]
    #[command(name = "slide-preview", about = "Render a bonus slide draft as preview JSON")]
    struct Cli {
        /// Slide draft JSON (`{"title": ..., "boxes": [...]}`).
        draft: PathBuf,

        #[arg(long, value_enum, default_value_t = Device::Desktop)]
        device: Device,

        /// Carousel steps from the first slide (mobile only, wraps around).
        #[arg(long, default_value_t = 0)]
        slide: usize,

        /// Number of frames to print, one per tick.
        #[arg(long, default_value_t = 1)]
        ticks: u32,

        /// Advance the mobile carousel on every tick.
        #[arg(long)]
        autoplay: bool,

        /// Overrides `SLIDE_PREVIEW_IMAGE_BASE_URL`.
        #[arg(long)]
        image_base_url: Option<String>,
    }

    pub async fn main() -> ExitCode {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();

        match run(Cli::parse()).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "slide preview failed");
                ExitCode::FAILURE
            }
        }
    }

    async fn run(cli: Cli) -> Result<(), PreviewError> {
        let mut config = PreviewConfig::from_env()?;
        if let Some(base) = cli.image_base_url.as_deref() {
            config = config.with_image_base_url(base);
        }

        let draft = SlideDraft::load(&cli.draft)?;
        let device = DeviceMode::from(cli.device);
        let mut carousel = CarouselState::new(draft.boxes.len(), device);
        if device == DeviceMode::Mobile {
            carousel.advance_by(cli.slide);
        }
        info!(
            title = %draft.title,
            boxes = draft.boxes.len(),
            device = device.label(),
            tick_ms = config.tick_ms,
            "slide draft loaded"
        );

        print_frame(&draft, &config, device, carousel.current())?;
        if cli.ticks <= 1 {
            return Ok(());
        }

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<()>();
        let ticker = Ticker::start(config.tick_interval(), move || {
            let _ = tx.send(());
        });

        let mut printed = 1;
        while printed < cli.ticks && rx.recv().await.is_some() {
            if cli.autoplay && device == DeviceMode::Mobile {
                carousel.next();
            }
            print_frame(&draft, &config, device, carousel.current())?;
            printed += 1;
        }
        drop(ticker);
        Ok(())
    }

    fn print_frame(
        draft: &SlideDraft,
        config: &PreviewConfig,
        device: DeviceMode,
        current_slide: usize,
    ) -> Result<(), PreviewError> {
        let model = PreviewModel::from_draft(draft, config, device, current_slide, OffsetDateTime::now_utc());
        println!("{}", serde_json::to_string(&model)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    cli::main().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
