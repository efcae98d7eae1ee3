use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;
use widgetui::{
    core::state::ui::Tab,
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[tokio::test]
async fn test_carousel_browsing_renders_current_image() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::with_events(
        80,
        16,
        [Event::Init, key(KeyCode::Right), key(KeyCode::Right), Event::Render],
    )?));
    let mut runner = AppRunner::new(Config::from_defaults()?, Tab::Carousel, Arc::clone(&tui));

    runner.run().await?;

    assert_eq!(runner.state().carousel.current_index(), 2);
    let tui = tui.lock().await;
    let rows = tui.rows();
    assert!(rows.iter().any(|row| row.contains("/path/to/images/image3.jpg")));
    assert!(rows.iter().any(|row| row.contains("3/3")));
    Ok(())
}

#[tokio::test]
async fn test_ctrl_c_quits_from_contact_form() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::with_events(
        80,
        16,
        [key(KeyCode::Char('h')), ctrl('c'), key(KeyCode::Char('i'))],
    )?));
    let mut runner = AppRunner::new(Config::from_defaults()?, Tab::Contact, Arc::clone(&tui));

    runner.run().await?;

    assert!(runner.state().system.should_quit);
    assert_eq!(runner.state().contact_form.name(), "h");
    assert!(!tui.lock().await.is_entered());
    Ok(())
}

#[tokio::test]
async fn test_submit_flash_is_drawn() -> Result<()> {
    let mut events = vec![key(KeyCode::Down)];
    events.extend("a@b.io".chars().map(|c| key(KeyCode::Char(c))));
    events.push(key(KeyCode::Down));
    events.extend("hello".chars().map(|c| key(KeyCode::Char(c))));
    events.push(ctrl('s'));
    let tui = Arc::new(Mutex::new(TestTui::with_events(80, 16, events)?));
    let mut runner = AppRunner::new(Config::from_defaults()?, Tab::Contact, Arc::clone(&tui));

    runner.run().await?;

    let rows = tui.lock().await.rows();
    assert_eq!(rows[15].trim_end(), "[Form] Message sent successfully!");
    Ok(())
}

#[tokio::test]
async fn test_timer_start_then_quit_stops_ticker() -> Result<()> {
    let tui = Arc::new(Mutex::new(TestTui::with_events(
        80,
        16,
        [key(KeyCode::Char('s')), key(KeyCode::Char('q'))],
    )?));
    let mut runner = AppRunner::new(Config::from_defaults()?, Tab::Timer, tui);

    runner.run().await?;

    assert!(runner.state().timer.is_running());
    assert!(!runner.is_ticking());
    Ok(())
}
