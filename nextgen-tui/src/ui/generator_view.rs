//! Generator view: header, parameter form, signal list, footer.

use ratatui::layout::{Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use nextgen_core::Direction;

use crate::app::{AppState, FormControl};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(9), // form
            Constraint::Min(3),    // signals
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_form(f, chunks[1], app);
    render_signals(f, chunks[2], app);
    render_footer(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("⚡ NEXTGEN", theme::glow())).centered(),
        Line::from(Span::styled(
            "Advanced Trading Signal Generator",
            theme::muted(),
        ))
        .centered(),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_form(f: &mut Frame, area: Rect, app: &AppState) {
    let g = &app.generator;
    let form_active = g.focus != FormControl::Signals;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(form_active))
        .title(" Generate Trading Signals ")
        .title_style(theme::panel_title(form_active));

    let req = &g.request;
    let backtest = if req.backtest_filter { "[x]" } else { "[ ]" };

    let mut lines: Vec<Line> = Vec::new();
    control(&mut lines, g.focus, FormControl::Asset, format!("◀ {} ▶", req.asset));
    control(&mut lines, g.focus, FormControl::Count, format!("◀ {} ▶", req.count));
    control(
        &mut lines,
        g.focus,
        FormControl::Filter,
        format!("◀ {} ▶", req.direction_filter.description()),
    );
    control(&mut lines, g.focus, FormControl::Backtest, backtest.to_string());
    lines.push(Line::from(""));

    let button = if g.busy {
        " Generating... "
    } else {
        " Generate Signals "
    };
    let button_style = if g.busy {
        theme::muted()
    } else if g.focus == FormControl::Generate {
        theme::focused()
    } else {
        theme::accent_bold()
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(button, button_style),
    ]));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn control(lines: &mut Vec<Line<'static>>, focus: FormControl, which: FormControl, value: String) {
    let focused = focus == which;
    let label_style = if focused {
        theme::accent_bold()
    } else {
        theme::muted()
    };
    let value_style = if focused {
        theme::focused()
    } else {
        theme::text()
    };
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>34}  ", which.label()), label_style),
        Span::styled(value, value_style),
    ]));
}

fn render_signals(f: &mut Frame, area: Rect, app: &AppState) {
    let g = &app.generator;
    let active = g.focus == FormControl::Signals;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(format!(" Generated Signals ({}) ", g.signals.len()))
        .title_style(theme::panel_title(active));

    if g.signals.is_empty() {
        let hint = if g.busy {
            "Analyzing market data and trends..."
        } else {
            "No signals yet. Press Enter or g to generate."
        };
        let para = Paragraph::new(Span::styled(hint, theme::muted())).block(block);
        f.render_widget(para, area);
        return;
    }

    let items: Vec<ListItem> = g
        .signals
        .iter()
        .map(|s| {
            let arrow = match s.direction {
                Direction::Call => "▲",
                Direction::Put => "▼",
            };
            ListItem::new(Line::from(vec![
                Span::styled(" ● ", theme::direction(s.direction)),
                Span::styled(format!("{}  ", s.time()), theme::text()),
                Span::styled(format!("{:<22}", s.asset), theme::muted()),
                Span::styled(format!("{arrow} {}", s.direction), theme::direction(s.direction)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if active {
        state.select(Some(g.cursor));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::focused())
        .highlight_symbol("» ");
    f.render_stateful_widget(list, area, &mut state);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "© NEXTGEN Trading Platform | [c] copy signal  [y] copy all  [?] help",
        theme::muted(),
    ))
    .centered();
    f.render_widget(Paragraph::new(line), area);
}
