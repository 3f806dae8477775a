use crate::app::state::ContactsState;
use crate::app::App;
use crate::ui::widgets::palette::Palette;
use autodrive_core::forms::contact::{ContactField, SUCCESS_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_contacts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let contacts = &app.contacts;
    let form = &contacts.form;

    let mut lines = Vec::new();
    for (i, field) in ContactField::ALL.into_iter().enumerate() {
        let focused = contacts.focus == i;
        let style = if focused {
            palette.selected()
        } else {
            Style::default().fg(palette.text)
        };
        let cursor = if focused { "▏" } else { "" };

        let value = match field {
            ContactField::Name => format!("{}{cursor}", form.name),
            ContactField::Phone => format!("{}{cursor}", form.phone),
            ContactField::Email => format!("{}{cursor}", form.email),
            ContactField::Message => format!("{}{cursor}", form.message),
            ContactField::Consent => {
                let mark = if form.consent { "[x]" } else { "[ ]" };
                lines.push(Line::from(Span::styled(format!("{mark} {}", field.label()), style)));
                push_error(contacts, field, &mut lines, palette);
                continue;
            }
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", field.label()), palette.muted()),
            Span::styled(value, style),
        ]));
        push_error(contacts, field, &mut lines, palette);
    }

    lines.push(Line::from(""));
    let submit_style = if contacts.focus == ContactsState::SUBMIT {
        palette.selected()
    } else {
        palette.key()
    };
    lines.push(Line::from(Span::styled("[ Отправить ]", submit_style)));

    if contacts.success {
        lines.push(Line::from(Span::styled(
            SUCCESS_TEXT,
            Style::default().fg(palette.success),
        )));
    }
    if let Some(lead) = &contacts.last_lead {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(lead.note(), palette.muted())));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Заявка ")
            .title_style(palette.heading())
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn push_error(
    contacts: &ContactsState,
    field: ContactField,
    lines: &mut Vec<Line<'_>>,
    palette: Palette,
) {
    if let Some(message) = contacts.errors.message(field) {
        lines.push(Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(palette.error),
        )));
    }
}
