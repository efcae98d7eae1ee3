use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::Cmd,
        raw_msg::RawMsg,
        state::{ui::Tab, AppState},
    },
    infrastructure::{
        config::Config,
        ticker::Ticker,
        tui::{Event, Frame, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

enum Input {
    Terminal(Option<Event>),
    Raw(RawMsg),
}

/// Drives the Elm loop against a terminal: events in, commands out, frames drawn.
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: Arc<Mutex<T>>,
    ticker: Ticker,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    raw_rx: mpsc::UnboundedReceiver<RawMsg>,
    components: Components,
    should_render: bool,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(config: Config, tab: Tab, tui: Arc<Mutex<T>>) -> Self {
        Self::with_ticker(config, tab, tui, Ticker::default())
    }

    pub fn with_ticker(config: Config, tab: Tab, tui: Arc<Mutex<T>>, ticker: Ticker) -> Self {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        Self {
            runtime: Runtime::new(AppState::new_with_config(config, tab)),
            tui,
            ticker,
            raw_tx,
            raw_rx,
            components: Components::new(),
            should_render: true,
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Run until a quit message arrives or the terminal runs out of events
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        loop {
            self.render().await?;

            let input = {
                let mut tui = self.tui.lock().await;
                tokio::select! {
                    event = tui.next() => Input::Terminal(event),
                    Some(raw) = self.raw_rx.recv() => Input::Raw(raw),
                }
            };

            match input {
                Input::Terminal(Some(event)) => self.handle_event(event).await?,
                Input::Terminal(None) => {
                    log::info!("Terminal event stream ended");
                    self.runtime.send_raw_msg(RawMsg::Quit);
                }
                Input::Raw(raw) => self.receive_raw(raw),
            }

            self.runtime.process_all_messages();
            let commands = self.runtime.pending_commands();
            self.execute_commands(commands);

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.ticker.cancel();
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Queue a message from a background task, dropping ticks from cancelled intervals
    fn receive_raw(&mut self, raw: RawMsg) {
        match raw {
            RawMsg::TimerTick(generation) if !self.ticker.is_current(generation) => {
                log::debug!("Dropping stale timer tick from generation {generation}");
            }
            raw => {
                self.runtime.send_raw_msg(raw);
                self.should_render = true;
            }
        }
    }

    async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => {
                self.runtime.send_raw_msg(RawMsg::Key(key));
                self.should_render = true;
            }
            Event::Resize(w, h) => {
                self.tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                self.should_render = true;
            }
            Event::Render => self.should_render = true,
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("Failed to read terminal event".to_string())),
            Event::Tick
            | Event::Init
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_) => {}
        }
        Ok(())
    }

    fn execute_commands(&mut self, commands: Vec<Cmd>) {
        for cmd in commands {
            match cmd {
                Cmd::ScheduleTick => self.ticker.schedule(self.raw_tx.clone()),
                Cmd::CancelTick => self.ticker.cancel(),
                Cmd::LogInfo { message } => log::info!("{message}"),
                Cmd::LogError { message } => log::error!("{message}"),
            }
        }
    }

    async fn suspend(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.process_all_messages();
        self.should_render = true;
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        if !self.should_render {
            return Ok(());
        }
        let state = self.runtime.state();
        let components = &self.components;
        self.tui
            .lock()
            .await
            .draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))?;
        self.should_render = false;
        Ok(())
    }
}
