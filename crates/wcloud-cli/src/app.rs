#![forbid(unsafe_code)]

//! The host that owns the engine, its render state and the scene.
//!
//! Regenerate signals arrive as text. Between signals the scene advances by
//! a fixed simulated frame, and any fired settle timer is reported back to
//! the render state.

use std::fs;
use std::io::{BufRead, Write};
use std::time::Duration;

use wcloud::prelude::*;
use wcloud::{AnimationConfig, MeasuredFootprint, TimerId};

use crate::cli::{FootprintKind, Opts, OutputFormat};
use crate::error::CliError;
use crate::trace::LoggedSurface;

/// Step used while settling the scene before export.
const SETTLE_STEP: Duration = Duration::from_millis(16);

/// Engine, state and scene for one cloud view.
#[derive(Debug)]
pub struct CloudApp {
    engine: CloudEngine,
    state: RenderState,
    scene: SceneSurface,
    layout: Vec<LayoutResult>,
    trace_ops: bool,
}

impl CloudApp {
    pub fn new(opts: &Opts) -> Self {
        let config = EngineConfig {
            layout: LayoutConfig {
                max_words: opts.max_words,
                ..LayoutConfig::default()
            },
            animation: AnimationConfig {
                transition: Duration::from_millis(opts.transition_ms),
                ..AnimationConfig::default()
            },
        };
        let engine = CloudEngine::new(config);
        let engine = match opts.footprint {
            FootprintKind::Heuristic => engine,
            FootprintKind::Measured => engine.with_footprint(MeasuredFootprint::default()),
        };
        Self {
            scene: SceneSurface::new(config.layout.canvas),
            engine,
            state: RenderState::new(),
            layout: Vec::new(),
            trace_ops: opts.trace_ops,
        }
    }

    /// Initial render of the empty cloud.
    pub fn mount(&mut self) {
        tracing::debug!("mount");
        self.render(&[]);
    }

    /// Recompute the cloud from `text`.
    pub fn regenerate(&mut self, text: &str) {
        let entries = extract(text);
        tracing::debug!(bytes = text.len(), terms = entries.len(), "regenerate");
        self.render(&entries);
    }

    fn render(&mut self, entries: &[FrequencyEntry]) {
        let state = std::mem::take(&mut self.state);
        let (layout, state) = if self.trace_ops {
            let mut logged = LoggedSurface::new(&mut self.scene);
            self.engine.render(entries, state, &mut logged)
        } else {
            self.engine.render(entries, state, &mut self.scene)
        };
        self.state = state;
        self.layout = layout;
    }

    /// Advance simulated time, delivering fired timers.
    pub fn advance(&mut self, dt: Duration) {
        let fired = self.scene.advance(dt);
        self.deliver(fired);
    }

    /// Advance until every transition and timer has finished.
    pub fn settle(&mut self) {
        let fired = self.scene.advance_until_idle(SETTLE_STEP);
        self.deliver(fired);
    }

    fn deliver(&mut self, fired: Vec<TimerId>) {
        for id in fired {
            self.state.on_timer(id);
        }
    }

    /// Cancel any pending settle timer.
    pub fn teardown(&mut self) {
        if self.trace_ops {
            let mut logged = LoggedSurface::new(&mut self.scene);
            self.engine.teardown(&mut self.state, &mut logged);
        } else {
            self.engine.teardown(&mut self.state, &mut self.scene);
        }
    }

    pub fn layout(&self) -> &[LayoutResult] {
        &self.layout
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn scene(&self) -> &SceneSurface {
        &self.scene
    }

    pub fn export_svg(&self) -> String {
        SvgExporter::default().export(&self.scene)
    }

    /// The last layout batch as a JSON array.
    pub fn export_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(&self.layout)?)
    }
}

/// Drive a full session: mount, feed signals, settle, export.
pub fn run<R: BufRead, W: Write>(opts: &Opts, input: R, mut output: W) -> Result<(), CliError> {
    let frame = Duration::from_millis(opts.frame_ms);
    let mut app = CloudApp::new(opts);
    app.mount();

    if opts.text.is_empty() {
        for line in input.lines() {
            let line = line?;
            app.advance(frame);
            app.regenerate(&line);
        }
    } else {
        app.advance(frame);
        app.regenerate(&opts.text.join(" "));
    }
    app.settle();

    let document = match opts.format {
        OutputFormat::Svg => app.export_svg(),
        OutputFormat::Json => app.export_json()?,
    };
    app.teardown();

    match &opts.out {
        Some(path) => {
            fs::write(path, document.as_bytes())?;
            tracing::info!(path = %path.display(), words = app.layout().len(), "cloud written");
        }
        None => {
            output.write_all(document.as_bytes())?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(text: &str) -> Opts {
        Opts {
            text: text.split_whitespace().map(String::from).collect(),
            ..Opts::default()
        }
    }

    #[test]
    fn mount_renders_empty_cloud() {
        let mut app = CloudApp::new(&Opts::default());
        app.mount();
        assert!(app.layout().is_empty());
        assert!(app.scene().is_empty());
        assert_eq!(app.state().pending_timer(), None);
    }

    #[test]
    fn regenerate_then_settle_flips_first_paint() {
        let mut app = CloudApp::new(&Opts::default());
        app.mount();
        app.regenerate("the cat sat on the mat the cat ran");
        assert!(!app.state().is_first_paint_done());
        app.settle();
        assert!(app.state().is_first_paint_done());
        assert_eq!(app.scene().len(), 4);
        let cat = app.scene().shape("cat").expect("cat drawn");
        assert_eq!(cat.font_size_px, 56.0);
    }

    #[test]
    fn teardown_before_timer_keeps_first_paint() {
        let mut app = CloudApp::new(&Opts::default());
        app.regenerate("alpha beta");
        app.teardown();
        app.settle();
        assert!(!app.state().is_first_paint_done());
    }

    #[test]
    fn measured_footprint_and_max_words() {
        let o = Opts {
            max_words: 2,
            footprint: FootprintKind::Measured,
            ..Opts::default()
        };
        let mut app = CloudApp::new(&o);
        app.regenerate("one one two two three");
        assert_eq!(app.layout().len(), 2);
    }

    #[test]
    fn run_with_text_writes_svg() {
        let mut out = Vec::new();
        run(&opts("hello hello world"), std::io::empty(), &mut out).expect("run succeeds");
        let svg = String::from_utf8(out).expect("utf8");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">hello</text>"));
        assert!(svg.contains(">world</text>"));
    }

    #[test]
    fn run_reads_stdin_lines_as_signals() {
        let o = Opts {
            format: OutputFormat::Json,
            ..Opts::default()
        };
        let input = "alpha beta\ngamma gamma delta\n".as_bytes();
        let mut out = Vec::new();
        run(&o, input, &mut out).expect("run succeeds");
        let json: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        let terms: Vec<_> = json
            .as_array()
            .expect("array")
            .iter()
            .map(|w| w["term"].as_str().expect("term").to_string())
            .collect();
        assert_eq!(terms, vec!["gamma", "delta"]);
    }

    #[test]
    fn run_empty_stdin_exports_empty_cloud() {
        let mut out = Vec::new();
        run(&Opts::default(), std::io::empty(), &mut out).expect("run succeeds");
        let svg = String::from_utf8(out).expect("utf8");
        assert!(!svg.contains("<text"));
    }
}
