use crate::app::state::ServicesRow;
use crate::app::App;
use crate::ui::widgets::palette::Palette;
use autodrive_core::format;
use autodrive_core::forms::services::{quote_label, ServiceKind, FAQ, REPORT_SURCHARGE, WASH_SURCHARGE};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_services(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_calculator(app, f, chunks[0], palette);
    render_faq(app, f, chunks[1], palette);
}

const fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn row_style(app: &App, row: ServicesRow, palette: Palette) -> Style {
    if app.services.row() == row {
        palette.selected()
    } else {
        Style::default().fg(palette.text)
    }
}

fn render_calculator(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let services = &app.services;
    let service = ServiceKind::ALL
        .get(services.service)
        .map_or("", |kind| kind.label());

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Услуга:   ", palette.muted()),
            Span::styled(
                format!("‹ {service} ›"),
                row_style(app, ServicesRow::Service, palette),
            ),
        ]),
        Line::from(vec![
            Span::styled("Срочность: ", palette.muted()),
            Span::styled(
                format!("‹ {} ›", services.urgency.label()),
                row_style(app, ServicesRow::Urgency, palette),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "{} Мойка (+{})",
                checkbox(services.wash),
                format::price(WASH_SURCHARGE)
            ),
            row_style(app, ServicesRow::Wash, palette),
        )),
        Line::from(Span::styled(
            format!(
                "{} Отчёт (+{})",
                checkbox(services.report),
                format::price(REPORT_SURCHARGE)
            ),
            row_style(app, ServicesRow::Report, palette),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ Рассчитать ]",
            row_style(app, ServicesRow::Calculate, palette),
        )),
        Line::from(""),
    ];

    if let Some(total) = services.quote {
        lines.push(Line::from(Span::styled(
            quote_label(total),
            Style::default()
                .fg(palette.price)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Калькулятор услуг ")
            .title_style(palette.heading())
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_faq(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let mut lines = Vec::new();
    for (i, (question, answer)) in FAQ.iter().enumerate() {
        let open = app.services.accordion.is_open(i);
        let marker = if open { "▾" } else { "▸" };
        lines.push(Line::from(Span::styled(
            format!("{marker} {question}"),
            row_style(app, ServicesRow::Faq(i), palette),
        )));
        if open {
            lines.push(Line::from(Span::styled(format!("  {answer}"), palette.muted())));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Частые вопросы ")
            .title_style(palette.heading())
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}
