use dnsv_domain::ResolutionStep;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Mutex;
use tracing::warn;

use super::style::{BOLD, GREEN, GREY, RED, RESET};
use crate::ports::StepReporter;

const BRANCH_INDENT: &str = "│   ";
const BRANCH_OPEN: &str = "╭─── ";
const BRANCH_CLOSE: &str = "╰─── ";

/// Renders trace steps as a tree, one opening and one closing line per step.
pub struct TreeFormatter<W> {
    out: Mutex<W>,
}

impl TreeFormatter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TreeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> StepReporter for TreeFormatter<W> {
    fn report(&self, server: &str, step: &ResolutionStep, depth: u32, canceled: bool) {
        let text = render_step(server, step, depth, canceled);
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            warn!(error = %e, depth, "Failed to write trace step");
        }
    }
}

pub fn render_header(server: &str) -> String {
    format!("\n{BOLD}{RED}DNS server:{RESET} {server}\n\n")
}

/// Text for one step; depth 1 is preceded by the server header.
pub fn render_step(server: &str, step: &ResolutionStep, depth: u32, canceled: bool) -> String {
    let mut text = String::new();
    if depth == 1 {
        text.push_str(&render_header(server));
    }

    let indent = BRANCH_INDENT.repeat(depth.saturating_sub(1) as usize);

    let _ = writeln!(
        text,
        "{indent}{BRANCH_OPEN}resolve({GREEN}domain:{RESET} {:?}, {GREEN}query:{RESET} {:?}, {GREEN}depth:{RESET} {depth})",
        step.query,
        step.query_type.as_str(),
    );

    let mut status = format!("{}ms:", step.elapsed_ms());
    if step.is_failure() {
        let _ = write!(status, "{GREY} # ERROR: {}{RESET}", step.response_text());
    } else {
        let _ = write!(status, "{GREY} # {}{RESET}", step.response_text());
    }
    if canceled {
        status.push_str(" == CANCELED ==");
    }

    let _ = writeln!(text, "{indent}{BRANCH_CLOSE}{status}");
    text
}
