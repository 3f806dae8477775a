use crate::app::state::DetailState;
use crate::app::App;
use crate::ui::widgets::palette::Palette;
use crate::ui::widgets::specs::{detail_specs, feature_lines, spec_lines};
use autodrive_core::{format, render, Vehicle};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_detail(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = Palette::for_theme(app.theme);

    let (Some(state), Some(vehicle)) = (app.detail.as_ref(), app.detail_vehicle()) else {
        let not_found = Paragraph::new(vec![
            Line::from(""),
            Line::from("Автомобиль не найден."),
            Line::from(Span::styled("Esc: назад   2: в каталог", palette.muted())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(not_found, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(columns[0]);

    render_gallery(state, f, left[0], palette);
    render_similar(app, state, f, left[1], palette);
    render_info(app, vehicle, f, columns[1], palette);
}

fn render_gallery(state: &DetailState, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let gallery = &state.gallery;
    let thumbs: Vec<Span<'_>> = gallery
        .thumbs()
        .iter()
        .enumerate()
        .map(|(i, thumb)| {
            let text = format!(" {} ", thumb.emoji);
            if i == gallery.active_index() {
                Span::styled(text, palette.selected())
            } else {
                Span::raw(text)
            }
        })
        .collect();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            gallery.active().emoji.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(gallery.active().gradient.clone(), palette.muted())),
        Line::from(""),
        Line::from(thumbs),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Фото ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_similar(app: &App, state: &DetailState, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let lines: Vec<Line<'_>> = if state.similar.is_empty() {
        vec![Line::from(Span::styled("Нет похожих предложений", palette.muted()))]
    } else {
        state
            .similar
            .iter()
            .filter_map(|id| app.dataset.find(id))
            .enumerate()
            .map(|(i, similar)| {
                let text = format!(
                    "{} {} · {}",
                    similar.emoji,
                    similar.title,
                    format::price(similar.price)
                );
                if i == state.similar_index {
                    Line::from(Span::styled(text, palette.selected()))
                } else {
                    Line::from(text)
                }
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Похожие ")
            .title_style(palette.heading())
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_info(app: &App, vehicle: &Vehicle, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let favorite = app.favorites.contains(&vehicle.id);

    let mut lines = vec![
        Line::from(Span::styled(
            vehicle.title.clone(),
            palette.heading(),
        )),
        Line::from(vehicle.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format::price(vehicle.price),
            Style::default()
                .fg(palette.price)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(spec_lines(detail_specs(vehicle), palette));
    lines.push(Line::from(""));
    lines.extend(feature_lines(vehicle, palette));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[p] ", palette.key()),
        Span::raw("Быстрое окно   "),
        Span::styled("[f] ", palette.key()),
        Span::raw(render::favorite_label(favorite)),
        Span::styled("   [5] ", palette.key()),
        Span::raw("Оставить заявку"),
    ]));

    let paragraph = Paragraph::new(lines)
        .style(palette.base())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
