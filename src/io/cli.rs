//! Command-line interface and the interactive and headless mural runners

use crate::io::configuration::{
    DEFAULT_DOWNLOAD_DIR, DEFAULT_IMAGES, DEFAULT_OUTPUT, PAGE_BACKGROUND, TARGET_FPS,
    WINDOW_TITLE,
};
use crate::io::console::{Console, Prompter};
use crate::io::dragdrop::handle_drop_event;
use crate::io::error::Result;
use crate::io::export::{
    DownloadSink, ExportOutcome, FileDownloadSink, handle_key_press, save_frame_as_png,
};
use crate::io::loader::{
    ImageLoader, LoadEvent, LoadRequester, choose_initial, read_bitmap,
};
use crate::io::progress::RenderProgress;
use crate::io::window::MuralWindow;
use crate::mural::Mural;
use crate::mural::scheduler::{SchedulerKind, select_scheduler};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mosaic-mural")]
#[command(
    author,
    version,
    about = "Paint an animated mosaic from the colors of an image"
)]
/// Command-line arguments for the mural
pub struct Cli {
    /// Images to pick the starting picture from
    #[arg(value_name = "IMAGE")]
    pub images: Vec<PathBuf>,

    /// Random seed for reproducible murals
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Render this many frames without a window, then save
    #[arg(short, long)]
    pub frames: Option<u64>,

    /// Output file for headless rendering
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Directory saved murals are written to
    #[arg(short = 'd', long, default_value = DEFAULT_DOWNLOAD_DIR)]
    pub out_dir: PathBuf,

    /// Target frame rate
    #[arg(long, default_value_t = TARGET_FPS)]
    pub fps: u32,

    /// Pace frames with a timer thread instead of the display loop
    #[arg(long)]
    pub timer: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Images to pick from, falling back to the bundled defaults
    pub fn candidates(&self) -> Vec<PathBuf> {
        if self.images.is_empty() {
            DEFAULT_IMAGES.iter().map(PathBuf::from).collect()
        } else {
            self.images.clone()
        }
    }

    /// Pacing strategy for the interactive loop
    pub const fn scheduler_kind(&self) -> SchedulerKind {
        if self.timer {
            SchedulerKind::FixedInterval
        } else {
            SchedulerKind::DisplayRefresh
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed from the command line, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Runs the mural according to CLI arguments
pub struct App {
    cli: Cli,
}

impl App {
    /// Create an app for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run headless when a frame count is given, otherwise open the window
    ///
    /// # Errors
    ///
    /// Returns an error if no image can be chosen, the window fails, or
    /// saving fails
    pub fn run(&self) -> Result<()> {
        let seed = self.cli.resolve_seed();
        tracing::info!(seed, "starting mural");
        match self.cli.frames {
            Some(frames) => self.render_headless(seed, frames),
            None => self.run_interactive(seed),
        }
    }

    /// Load one image, paint `frames` frames as fast as possible and save
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded or the result cannot be saved
    pub fn render_headless(&self, seed: u64, frames: u64) -> Result<()> {
        let candidates = self.cli.candidates();
        let mut rng = StdRng::seed_from_u64(seed);
        let path = choose_initial(&candidates, &mut rng)?;
        tracing::info!(path = %path.display(), "initial image chosen");

        let bitmap = read_bitmap(path)?;
        let mut mural = Mural::new(seed);
        mural.load(&bitmap)?;

        let label = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let progress = RenderProgress::new(frames, &label, self.cli.should_show_progress());
        for _ in 0..frames {
            mural.tick();
            progress.advance();
        }
        progress.finish();

        save_frame_as_png(mural.surface(), &self.cli.output)?;
        tracing::info!(path = %self.cli.output.display(), frames, "mural saved");
        Ok(())
    }

    /// Open the mural window and animate until it is closed
    ///
    /// Each pass drains finished loads, dropped files and key presses before
    /// painting one frame, so every frame sees a single consistent bitmap.
    ///
    /// # Errors
    ///
    /// Returns an error if no initial image can be chosen or the window fails
    pub fn run_interactive(&self, seed: u64) -> Result<()> {
        let candidates = self.cli.candidates();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = choose_initial(&candidates, &mut rng)?;
        tracing::info!(path = %initial.display(), "initial image chosen");

        let loader = ImageLoader::new();
        loader.request_load(initial.clone());

        let mut mural = Mural::new(seed);
        let mut console = Console::spawn_stdin();
        let mut sink = FileDownloadSink::new(&self.cli.out_dir);
        let mut scheduler = select_scheduler(self.cli.scheduler_kind(), self.cli.fps)?;
        let (width, height) = mural.surface().dimensions();
        let mut window = MuralWindow::new(WINDOW_TITLE, width, height, PAGE_BACKGROUND)?;

        while window.is_open() {
            while let Some(event) = loader.poll() {
                apply_load_event(&mut mural, event);
            }

            while let Some(event) = console.next_drop() {
                handle_drop_event(event, &loader, &mut console);
            }

            for key_code in window.pressed_key_codes() {
                apply_key_press(key_code, &mural, &mut console, &mut sink);
            }

            mural.tick();
            window.present(mural.surface())?;
            scheduler.wait_for_frame()?;
        }

        tracing::info!(frames = mural.frames(), "mural closed");
        Ok(())
    }
}

/// Apply a finished load to the mural
///
/// A failed load is reported and the current animation keeps running.
pub fn apply_load_event(mural: &mut Mural, event: LoadEvent) {
    match event {
        LoadEvent::Loaded { path, bitmap } => match mural.load(&bitmap) {
            Ok(()) => {
                let (width, height) = mural.surface().dimensions();
                tracing::info!(path = %path.display(), width, height, "image loaded");
            }
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "image rejected");
            }
        },
        LoadEvent::Failed { path, error } => {
            tracing::error!(path = %path.display(), %error, "image failed to load");
        }
    }
}

/// Apply one key press to the mural
///
/// A failed export is reported and the animation keeps running, so the
/// painting stays on screen for another attempt.
pub fn apply_key_press(
    key_code: u32,
    mural: &Mural,
    prompter: &mut impl Prompter,
    sink: &mut impl DownloadSink,
) -> Option<ExportOutcome> {
    match handle_key_press(key_code, mural.surface(), prompter, sink) {
        Ok(outcome) => outcome,
        Err(error) => {
            tracing::error!(%error, "export failed");
            None
        }
    }
}
