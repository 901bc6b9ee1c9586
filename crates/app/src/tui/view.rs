use keepsake_core::domain::DurationBreakdown;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::f64::consts::TAU;
use std::time::Instant;
use super::model::{LiveHeart, TuiModel, ViewMode};

const FIELD_LABELS: [&str; 6] = ["Years", "Months", "Days", "Hours", "Minutes", "Seconds"];
const ACCENT: Color = Color::Rgb(0xFF, 0x6B, 0x8B);
const STRIP_GLYPH: &str = "♥";

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        Self::render_at(model, frame, Instant::now());
    }

    pub fn render_at(model: &TuiModel, frame: &mut Frame, now: Instant) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Compact journey strip
                Constraint::Length(1), // Key hints
            ])
            .split(size);

        Self::render_title_bar(frame, chunks[0]);

        match model.mode {
            ViewMode::Dashboard => Self::render_dashboard(model, frame, chunks[1]),
            ViewMode::Help => Self::render_help_view(frame, chunks[1]),
        }

        Self::render_compact_journey(model, frame, chunks[2]);
        Self::render_key_hints(model, frame, chunks[3]);

        // Hearts float above everything else
        Self::render_hearts(model, frame, size, now);
    }

    fn render_title_bar(frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("Keepsake - Our Story")
            .style(Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_dashboard(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Live clock
                Constraint::Length(4), // Countdown + progress
                Constraint::Length(4), // Journey, full size
                Constraint::Min(3),    // Memory cards
            ])
            .split(area);

        Self::render_clock(model, frame, chunks[0]);
        Self::render_countdown(model, frame, chunks[1]);
        Self::render_journey(model, frame, chunks[2]);
        Self::render_cards(model, frame, chunks[3]);
    }

    fn render_clock(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let (time, date) = match &model.output {
            Some(output) => (output.clock.time.as_str(), output.clock.date.as_str()),
            None => ("--:--:--", ""),
        };

        let line = Line::from(vec![
            Span::styled(time, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::raw(date),
        ]);

        let clock = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title("Right Now"))
            .alignment(Alignment::Center);
        frame.render_widget(clock, area);
    }

    fn render_countdown(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Countdown to Our Anniversary");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let Some(output) = &model.output else {
            return;
        };
        let countdown = &output.countdown;

        let fields = Paragraph::new(Self::inline_fields(&countdown.remaining))
            .alignment(Alignment::Center);
        frame.render_widget(fields, rows[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(ACCENT).bg(Color::DarkGray))
            .ratio(countdown.progress.fraction())
            .label(countdown.progress.label());
        frame.render_widget(gauge, rows[1]);
    }

    /// `value Label` pairs on one line
    fn inline_fields(breakdown: &DurationBreakdown) -> Line<'static> {
        let mut spans = Vec::with_capacity(12);
        for (value, label) in breakdown.fields().into_iter().zip(FIELD_LABELS) {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(value, Style::default().add_modifier(Modifier::BOLD)));
            spans.push(Span::raw(format!(" {}", label)));
        }
        Line::from(spans)
    }

    /// Full-size journey layout: one column per field, value above label
    fn render_journey(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Our Journey");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let journey = model.output.as_ref().map(|o| o.journey).unwrap_or_default();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 6); 6])
            .split(inner);

        for ((value, label), column) in journey.fields().into_iter().zip(FIELD_LABELS).zip(columns.iter()) {
            let cell = Paragraph::new(vec![
                Line::from(Span::styled(value, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(cell, *column);
        }
    }

    /// Compact journey layout, same values as the full-size panel
    fn render_compact_journey(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let journey = model.output.as_ref().map(|o| o.journey).unwrap_or_default();
        let strip = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", STRIP_GLYPH), Style::default().fg(ACCENT)),
            Span::raw("Together "),
            Span::styled(journey.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        frame.render_widget(strip, area);
    }

    fn render_cards(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let items: Vec<ListItem> = model
            .cards
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let mut spans = vec![Span::raw(card.title.clone())];
                if model.video.card == Some(index) {
                    let badge = if model.video.overlay_visible() { " [▶ play]" } else { " [playing]" };
                    spans.push(Span::styled(badge, Style::default().fg(Color::Yellow)));
                }

                let mut style = Style::default();
                if index == model.cards.selected {
                    style = style.bg(Color::DarkGray);
                }
                if model.cards.pressed == Some(index) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(Line::from(spans)).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Memories"));
        frame.render_widget(list, chunks[0]);

        let message = model
            .cards
            .message
            .as_deref()
            .unwrap_or("Press Enter on a memory to open it.");
        let message = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL).title("Message"))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[1]);
    }

    fn render_help_view(frame: &mut Frame, area: Rect) {
        let help_text = vec![
            Line::from(Span::styled("Keepsake Help", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled("Memories:", Style::default().add_modifier(Modifier::UNDERLINED))),
            Line::from("  ←/h →/l - Select a memory"),
            Line::from("  Enter - Open the selected memory"),
            Line::from("  Space - Send some hearts"),
            Line::from(""),
            Line::from(Span::styled("Video:", Style::default().add_modifier(Modifier::UNDERLINED))),
            Line::from("  v - Play"),
            Line::from("  p - Pause"),
            Line::from(""),
            Line::from(Span::styled("Global:", Style::default().add_modifier(Modifier::UNDERLINED))),
            Line::from("  ? - Show this help"),
            Line::from("  Ctrl+C / Esc / q - Quit"),
            Line::from(""),
            Line::from("Press any key to close help..."),
        ];

        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        frame.render_widget(help, area);
    }

    fn render_key_hints(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let hints = match model.mode {
            ViewMode::Dashboard if model.video.card.is_some() => {
                "←/→ Select | Enter Open | Space Hearts | v Play | p Pause | ? Help | q Quit"
            }
            ViewMode::Dashboard => "←/→ Select | Enter Open | Space Hearts | ? Help | q Quit",
            ViewMode::Help => "Any key to close",
        };
        frame.render_widget(Paragraph::new(hints).style(Style::default().fg(Color::Gray)), area);
    }

    fn render_hearts(model: &TuiModel, frame: &mut Frame, area: Rect, now: Instant) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for heart in &model.hearts {
            let (col, row) = Self::heart_position(heart, area, now);
            let (r, g, b) = heart.particle.rgb();
            let mut style = Style::default().fg(Color::Rgb(r, g, b));
            if heart.particle.size >= 33.0 {
                style = style.add_modifier(Modifier::BOLD);
            }
            frame.buffer_mut().set_string(col, row, heart.particle.glyph, style);
        }
    }

    /// Where a heart sits on screen: it rises from the bottom row to the top over
    /// its lifetime, swaying sideways by its rotation.
    fn heart_position(heart: &LiveHeart, area: Rect, now: Instant) -> (u16, u16) {
        let progress = heart.progress(now);
        let max_col = f64::from(area.width.saturating_sub(1));
        let max_row = f64::from(area.height.saturating_sub(1));

        let sway = (heart.particle.rotation.to_radians() + progress * TAU).sin() * 2.0;
        let col = (heart.particle.x + sway).clamp(0.0, max_col).round() as u16;
        let row = (max_row * (1.0 - progress)).round() as u16;

        (area.x + col, area.y + row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_core::app::{Countdown, LiveClock, RenderOutput};
    use keepsake_core::domain::{Event, HeartId, HeartParticle, MemoryCard, ProgressRatio};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 30;

    fn output() -> RenderOutput {
        RenderOutput {
            clock: LiveClock {
                time: "01:02:03".to_string(),
                date: "Saturday, December 13, 2025".to_string(),
            },
            countdown: Countdown {
                remaining: DurationBreakdown { years: 0, months: 11, days: 28, hours: 22, minutes: 57, seconds: 57 },
                progress: ProgressRatio::from_remaining(358 * 86_400 + 22 * 3600 + 57 * 60 + 57),
            },
            journey: DurationBreakdown { years: 0, months: 0, days: 1, hours: 1, minutes: 2, seconds: 3 },
        }
    }

    fn rows(model: &TuiModel, now: Instant) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|f| TuiView::render_at(model, f, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(WIDTH as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn model_with_output() -> TuiModel {
        let mut model = TuiModel::new(vec![MemoryCard::new("Picnic", "Ants everywhere")], 12);
        model.apply_event(&Event::Ticked { output: output() });
        model
    }

    #[test]
    fn test_renders_clock_and_countdown() {
        let rows = rows(&model_with_output(), Instant::now());
        let screen = rows.join("\n");
        assert!(screen.contains("Keepsake - Our Story"));
        assert!(screen.contains("01:02:03"));
        assert!(screen.contains("Saturday, December 13, 2025"));
        assert!(screen.contains("0 Years  11 Months  28 Days  22 Hours  57 Minutes  57 Seconds"));
        assert!(screen.contains(&output().countdown.progress.label()));
    }

    #[test]
    fn test_journey_layouts_show_identical_values() {
        let rows = rows(&model_with_output(), Instant::now());

        let title_row = rows.iter().position(|r| r.contains("Our Journey")).expect("journey panel");
        let values: Vec<&str> = rows[title_row + 1]
            .split_whitespace()
            .filter(|s| *s != "│")
            .collect();
        assert_eq!(values, ["0", "0", "1", "01", "02", "03"]);
        assert!(rows[title_row + 2].contains("Seconds"));

        let strip = rows.iter().find(|r| r.contains("Together")).expect("compact strip");
        assert!(strip.contains("0y 0m 1d 01:02:03"));
    }

    #[test]
    fn test_renders_placeholders_before_first_tick() {
        let model = TuiModel::new(vec![], 12);
        let screen = rows(&model, Instant::now()).join("\n");
        assert!(screen.contains("--:--:--"));
        assert!(screen.contains("0y 0m 0d 00:00:00"));
    }

    #[test]
    fn test_renders_card_message_and_video_badge() {
        let mut model = TuiModel::new(
            vec![
                MemoryCard::new("Picnic", "Ants everywhere"),
                MemoryCard {
                    title: "Concert".to_string(),
                    message: "Front row".to_string(),
                    video: Some("concert.mp4".into()),
                },
            ],
            12,
        );
        model.press_selected_card();
        let screen = rows(&model, Instant::now()).join("\n");
        assert!(screen.contains("Ants everywhere"));
        assert!(screen.contains("Concert [▶ play]"));
        assert!(screen.contains("v Play"));

        model.apply_event(&Event::PlaybackChanged { playing: true });
        let screen = rows(&model, Instant::now()).join("\n");
        assert!(screen.contains("Concert [playing]"));
    }

    #[test]
    fn test_heart_rises_over_lifetime() {
        let born = Instant::now();
        let heart = LiveHeart {
            particle: HeartParticle {
                id: HeartId(7),
                x: 40.0,
                size: 40.0,
                duration: Duration::from_secs(2),
                rotation: 0.0,
                color: "#06D6A0",
                glyph: "💚",
            },
            born,
        };
        let area = Rect::new(0, 0, WIDTH, HEIGHT);

        let (_, start_row) = TuiView::heart_position(&heart, area, born);
        let (_, mid_row) = TuiView::heart_position(&heart, area, born + Duration::from_secs(1));
        let (col, end_row) = TuiView::heart_position(&heart, area, born + Duration::from_secs(2));
        assert_eq!(start_row, HEIGHT - 1);
        assert!(mid_row < start_row && mid_row > end_row);
        assert_eq!(end_row, 0);
        assert!(col < WIDTH);
    }

    #[test]
    fn test_heart_drawn_on_screen() {
        let born = Instant::now();
        let mut model = TuiModel::new(vec![], 12);
        model.apply_event_at(
            &Event::HeartsSpawned {
                hearts: vec![HeartParticle {
                    id: HeartId(1),
                    x: 10.0,
                    size: 25.0,
                    duration: Duration::from_secs(3),
                    rotation: 0.0,
                    color: "#FF6B8B",
                    glyph: "💖",
                }],
            },
            born,
        );
        let rows = rows(&model, born);
        assert_eq!(rows[(HEIGHT - 1) as usize].chars().nth(10), Some('💖'));
    }

    #[test]
    fn test_help_view() {
        let mut model = model_with_output();
        model.mode = ViewMode::Help;
        let screen = rows(&model, Instant::now()).join("\n");
        assert!(screen.contains("Keepsake Help"));
        assert!(screen.contains("Any key to close"));
    }
}
