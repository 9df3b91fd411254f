//! Terminal tic-tac-toe runner.
//!
//! Uses crossterm for input (keyboard and mouse) and a framebuffer-based
//! renderer. The loop blocks on the next terminal event and redraws after
//! every one of them.

use anyhow::Result;
use crossterm::event;
use tracing::{error, info};

use tui_tictactoe::app::{App, Control};
use tui_tictactoe::config::AppConfig;
use tui_tictactoe::logging;
use tui_tictactoe::term::{FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(?config, "starting tui-tictactoe");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("game closed"),
        Err(e) => error!(error = %e, "game loop failed"),
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config.view());
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match app.handle_event(event::read()?) {
            Control::Continue => {}
            Control::Resized => term.invalidate(),
            Control::Quit => return Ok(()),
        }
    }
}
