use shelf_core::{AppViewModel, CollectionView, MovieCardView, NotificationKind, NotificationView};

const PLACEHOLDER: &str = "░░░░░░░░░░░░░░░░░░░░";
const EMPTY_HINT: &str =
    "There are no movies in your library. Try adding some movies or checking your library path.";

/// Turns the view model into terminal lines. Pure; the caller prints.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    match &view.collection {
        CollectionView::Loading { placeholders } => {
            lines.push("Loading library…".to_string());
            lines.extend((0..*placeholders).map(|_| format!("  {PLACEHOLDER}")));
        }
        CollectionView::Error { message } => {
            lines.push("[!] Error".to_string());
            lines.push(format!("    {message}"));
        }
        CollectionView::Empty => {
            lines.push("[i] No Movies Found".to_string());
            lines.push(format!("    {EMPTY_HINT}"));
        }
        CollectionView::Grid(cards) => {
            lines.push(format!("Library ({} movies)", cards.len()));
            lines.extend(cards.iter().map(format_card));
        }
    }

    if let Some(notification) = &view.notification {
        lines.push(String::new());
        lines.push(format_notification(notification));
    }

    lines
}

fn format_card(card: &MovieCardView) -> String {
    let year = card
        .year
        .map(|year| year.to_string())
        .unwrap_or_else(|| "Unknown Year".to_string());
    let cover = card.cover.as_deref().unwrap_or("No Cover");
    let marker = if card.refreshing { "  ⟳ refreshing" } else { "" };
    format!(
        "  #{id:<4} {title} ({year})  [{cover}]{marker}",
        id = card.movie_id,
        title = card.title,
    )
}

fn format_notification(notification: &NotificationView) -> String {
    let tag = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Error => "error",
    };
    match &notification.description {
        Some(description) => format!("[{tag}] {} — {description}", notification.title),
        None => format!("[{tag}] {}", notification.title),
    }
}
