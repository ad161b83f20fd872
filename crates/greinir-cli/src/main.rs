use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use greinir_config::Config;
use greinir_engine::{Block, ParsedDocument, Post, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block as PanelBlock, Borders, List, ListItem, ListState, Paragraph},
};
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    posts: Vec<Post>,
    site_url: Option<String>,
    post_list_state: ListState,
    current_content: Vec<String>,
}

impl App {
    fn new(content_path: PathBuf, site_url: Option<String>) -> Result<Self> {
        let posts = io::load_posts(&content_path)?;

        let mut app = Self {
            posts,
            site_url,
            post_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first post if available
        if !app.posts.is_empty() {
            app.post_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(i) => (i + 1) % self.posts.len(),
            None => 0,
        };
        self.post_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.posts.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.post_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        if let Some(index) = self.post_list_state.selected()
            && let Some(post) = self.posts.get(index)
        {
            let document = post.parse();
            self.current_content = render_post_content(post, &document, self.site_url.as_deref());
        }
    }
}

/// Flattens a parsed post into preview lines: metadata header, table of
/// contents, then one run of lines per block.
fn render_post_content(post: &Post, document: &ParsedDocument, site_url: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(post.title());
    if let Some(date) = &post.meta.date {
        lines.push(format!("Birt: {date}"));
    }
    if let Some(author) = &post.meta.author {
        lines.push(format!("Höfundur: {author}"));
    }
    if let Some(site_url) = site_url {
        lines.push(format!("Slóð: {}/blogg/{}", site_url.trim_end_matches('/'), post.slug()));
    }
    lines.push(String::new());

    if !document.toc.is_empty() {
        lines.push("Efnisyfirlit:".to_string());
        for entry in &document.toc {
            let indent = if entry.level == 3 { "    " } else { "  " };
            lines.push(format!("{indent}{} (#{})", entry.title, entry.id));
        }
        lines.push(String::new());
    }

    for block in &document.blocks {
        match block {
            Block::Heading { level, text, .. } => {
                let prefix = "#".repeat(*level as usize);
                lines.push(format!("{prefix} {text}"));
                lines.push(String::new());
            }
            Block::Paragraph { text } => {
                lines.push(text.clone());
                lines.push(String::new());
            }
            Block::List { items } => {
                for item in items {
                    lines.push(format!("• {item}"));
                }
                lines.push(String::new());
            }
            Block::Quote { text } => {
                lines.push(format!("> {text}"));
                lines.push(String::new());
            }
            Block::CodeBlock { code } => {
                lines.push("```".to_string());
                lines.extend(code.lines().map(|s| s.to_string()));
                lines.push("```".to_string());
                lines.push(String::new());
            }
            Block::Image { url, alt, caption } => {
                lines.push(format!("[mynd: {alt}] {url}"));
                if let Some(caption) = caption {
                    lines.push(format!("  \"{caption}\""));
                }
                lines.push(String::new());
            }
            Block::Callout { kind, text } => {
                lines.push(format!("{} {text}", kind.glyph()));
                lines.push(String::new());
            }
        }
    }

    lines
}

fn main() -> Result<()> {
    // Determine content path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let content_path;
    let site_url;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        content_path = PathBuf::from(&args[1]);
        site_url = None;
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                content_path = config.content_path;
                site_url = config.site_url;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [content-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate content directory using engine
    if let Err(e) = io::validate_content_dir(&content_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Content path '{}'{} is invalid: {e}",
            content_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(content_path, site_url)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_post(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_post(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Post list panel
    let post_items: Vec<ListItem> = app
        .posts
        .iter()
        .map(|post| {
            let date = post
                .meta
                .date
                .as_deref()
                .map(|d| format!("{d}  "))
                .unwrap_or_default();
            let display_text = format!("{date}{}", post.title());
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let posts_list = List::new(post_items)
        .block(PanelBlock::default().borders(Borders::ALL).title("Greinar"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(posts_list, chunks[0], &mut app.post_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Engar greinar fundust í efnismöppunni")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(vec![Span::raw(line.clone())]))
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(PanelBlock::default().borders(Borders::ALL).title("Grein"))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Hætta | "),
        Span::raw("↑/k: Fyrri grein | "),
        Span::raw("↓/j: Næsta grein"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(PanelBlock::default());

    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
