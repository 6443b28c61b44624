//! Linkshelf console demo.
//!
//! Walks through the add, edit, delete and open flows against a starter shelf
//! and prints the grouped view after each step.

use linkshelf::app::App;
use linkshelf::logging;
use linkshelf::services::category_grouper::EMPTY_GROUP_HINT;
use linkshelf::services::link_opener::LogOpener;
use linkshelf::services::notification::TracingSink;
use linkshelf::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use linkshelf::types::draft::DraftField;
use linkshelf::types::link::{Category, LinkId};

fn render(app: &App) {
    println!();
    for group in app.groups() {
        println!("  {} ({})", group.label, group.count);
        if group.is_empty() {
            println!("      {}", EMPTY_GROUP_HINT);
        }
        for link in &group.links {
            println!("    • {} <{}>", link.title, link.url);
            if let Some(desc) = &link.description {
                println!("      {}", desc);
            }
        }
    }
    let stats = app.stats();
    println!(
        "  ── {} total links · {} active categories",
        stats.total, stats.active_categories
    );
    println!();
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(None);
    let settings = settings_engine.load()?;
    logging::init(&settings.logging.filter);

    let mut app = App::new(&settings, Box::new(TracingSink), Box::new(LogOpener));

    section(&format!("Linkshelf v{}", env!("CARGO_PKG_VERSION")));
    render(&app);

    section("Add a link without a URL");
    app.begin_create();
    app.update_field(DraftField::Title("Rust Blog".to_string()));
    if let Err(e) = app.submit() {
        println!("  rejected: {} (dialog open: {})", e, app.is_dialog_open());
    }

    section("Fill in the URL and submit");
    app.update_field(DraftField::Url("https://blog.rust-lang.org".to_string()));
    app.update_field(DraftField::Category(Category::Social));
    let added = app.submit()?;
    println!("  added {} as {}", added.title, added.id);
    render(&app);

    section("Rename the first starter link");
    let first = LinkId::from("1");
    if app.begin_edit(&first).is_ok() {
        println!("  {}: {:?}", app.dialog_title(), app.draft().title);
        app.update_field(DraftField::Title("Portfolio (2026)".to_string()));
        app.submit()?;
    }
    render(&app);

    section("Open and delete the GitHub link");
    let github = LinkId::from("2");
    if let Ok(url) = app.open_link(&github) {
        println!("  opened {}", url);
    }
    app.delete(&github);
    render(&app);

    Ok(())
}
