mod app;
mod cli;
mod client;
mod config;
mod error;
mod logic;
mod models;
mod server;
mod ui;

use app::{App, FormField};
use clap::Parser;
use cli::{Cli, Commands};
use client::AdvisorClient;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::AdvisorScreen;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_directive())),
        )
        .init();

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    if let Commands::Init = command {
        Config::setup_interactive()?;
        return Ok(());
    }

    // Load configuration
    let mut config = match Config::load(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Run `plantops init` to create a config file");
            std::process::exit(1);
        }
    };

    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::start_server(&config.server).await?;
        }
        Commands::Ui { backend_url } => {
            if let Some(url) = backend_url {
                config.client.backend_url = url;
            }
            run_ui(config).await?;
        }
        Commands::Check => run_check(&config).await?,
        Commands::Init => {}
    }

    Ok(())
}

async fn run_check(config: &Config) -> Result<()> {
    println!("Configuration OK");
    println!("  API bind address: {}", config.server.bind_addr());
    println!("  Backend URL:      {}", config.client.backend_url);

    println!("Rule groups (evaluation order):");
    for (id, name) in logic::RulesEngine::new().list_rules() {
        println!("  {:<14} {}", id, name);
    }

    println!("Accepted values:");
    for (field, values) in logic::validation::ALLOWED_VALUES {
        println!("  {:<14} {}", field, values.join(", "));
    }

    let client = AdvisorClient::new(&config.client)?;
    match client.test_connection().await {
        Ok(true) => println!("  Backend health:   OK"),
        Ok(false) => println!("  Backend health:   UNHEALTHY"),
        Err(e) => println!("  Backend health:   OFFLINE ({})", e),
    }

    Ok(())
}

async fn run_ui(config: Config) -> Result<()> {
    let client = AdvisorClient::new(&config.client)?;
    let mut app = App::new(&config);

    match client.test_connection().await {
        Ok(true) => app.set_status("Backend: OK"),
        Ok(false) => app.set_status("Backend: UNHEALTHY"),
        Err(e) => {
            tracing::warn!("Backend health check failed: {}", e);
            app.set_status("Backend: OFFLINE");
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &AdvisorClient,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let screen = AdvisorScreen::new(&app.form, client.base_url())
                .with_result(app.recommendation.as_ref(), app.error_message.as_deref())
                .with_status(
                    app.status_message.as_deref(),
                    app.needs_submit || app.submitting,
                );
            f.render_widget(screen, area);
        })?;

        // Submit after the "submitting" frame has been drawn
        if app.needs_submit {
            app.needs_submit = false;
            app.submitting = true;
            let result = client.recommend(&app.form.inputs).await;
            app.apply_result(result);
            app.submitting = false;
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_input(app, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if app.form.editing {
        match code {
            KeyCode::Esc => app.form.cancel_editing(),
            KeyCode::Enter => {
                if let Err(msg) = app.form.finish_editing() {
                    app.set_status(&msg);
                }
            }
            KeyCode::Backspace => {
                app.form.edit_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                app.form.edit_buffer.push(c);
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => app.request_submit(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::BackTab => app.form.prev_field(),
        KeyCode::Down | KeyCode::Tab => app.form.next_field(),
        KeyCode::Left => app.form.step(false),
        KeyCode::Right => app.form.step(true),
        KeyCode::PageDown => app.form.step_large(false),
        KeyCode::PageUp => app.form.step_large(true),
        KeyCode::Enter => match app.form.focused_field {
            FormField::Submit => app.request_submit(),
            FormField::Temperature => app.form.start_editing(),
            _ => app.form.next_field(),
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_on_submit_requests_recommendation() {
        let mut app = App::new(&Config::default());
        app.form.focused_field = FormField::Submit;
        handle_input(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.needs_submit);
    }

    #[test]
    fn ctrl_r_submits_from_any_field() {
        let mut app = App::new(&Config::default());
        handle_input(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(app.needs_submit);
    }

    #[test]
    fn typing_a_temperature() {
        let mut app = App::new(&Config::default());
        app.form.focused_field = FormField::Temperature;
        handle_input(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.form.editing);

        app.form.edit_buffer.clear();
        for c in ['1', '2', 'x', '.', '5'] {
            handle_input(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.form.edit_buffer, "12.5");

        handle_input(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(!app.form.editing);
        assert!((app.form.inputs.temperature_c - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn q_does_not_quit_while_editing() {
        let mut app = App::new(&Config::default());
        app.form.focused_field = FormField::Temperature;
        app.form.start_editing();
        handle_input(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.should_quit);

        handle_input(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        handle_input(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn arrows_adjust_slider() {
        let mut app = App::new(&Config::default());
        handle_input(&mut app, KeyCode::Right, KeyModifiers::NONE);
        handle_input(&mut app, KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(app.form.inputs.soil_moisture, 46);
    }
}
