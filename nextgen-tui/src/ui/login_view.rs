//! Login view: centered card with username/password fields.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, LoginField};
use crate::theme;
use crate::ui::centered_fixed;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let card = centered_fixed(52, 16, area);
    f.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Prime Quotex Trader Bot ")
        .title_style(theme::panel_title(true));

    let gate = &app.login.gate;
    let masked: String = "*".repeat(gate.password.chars().count());

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled("  Advanced Trading Platform", theme::muted())),
        Line::from(""),
    ];

    field(
        &mut lines,
        "Username",
        &gate.username,
        "Enter username",
        app.login.focus == LoginField::Username,
    );
    lines.push(Line::from(""));
    field(
        &mut lines,
        "Password",
        &masked,
        "Enter password",
        app.login.focus == LoginField::Password,
    );
    lines.push(Line::from(""));

    match gate.error() {
        Some(err) => lines.push(Line::from(Span::styled(
            format!("  {err}"),
            theme::negative(),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(" Access Platform [Enter] ", theme::focused()),
    ]));
    lines.push(Line::from(Span::styled(
        "  [Tab] switch field  [Esc] quit",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines).block(block), card);
}

fn field<'a>(lines: &mut Vec<Line<'a>>, label: &str, value: &str, placeholder: &str, focused: bool) {
    let label_style = if focused {
        theme::accent_bold()
    } else {
        theme::muted()
    };
    lines.push(Line::from(Span::styled(format!("  {label}"), label_style)));

    let marker = if focused { "> " } else { "  " };
    let mut spans = vec![Span::styled(format!("  {marker}"), theme::accent())];
    if value.is_empty() {
        spans.push(Span::styled(placeholder.to_string(), theme::muted()));
    } else {
        spans.push(Span::styled(value.to_string(), theme::text()));
    }
    if focused {
        spans.push(Span::styled("_", theme::accent()));
    }
    lines.push(Line::from(spans));
}
