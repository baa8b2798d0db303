use crate::constants::{CYBER_DARK, LOGO_TEXT, NEON_CYAN, NEON_PINK};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const RING_AT: Duration = Duration::from_millis(1000);
const LOGO_AT: Duration = Duration::from_millis(2500);
const GLOW_AT: Duration = Duration::from_millis(4000);
const DONE_AT: Duration = Duration::from_millis(5500);

const RAIN_COLUMNS: usize = 50;
const RAIN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntroStage {
    Dark,
    Ring,
    Logo,
    Glow,
    Done,
}

impl IntroStage {
    pub fn at(elapsed: Duration) -> Self {
        if elapsed >= DONE_AT {
            IntroStage::Done
        } else if elapsed >= GLOW_AT {
            IntroStage::Glow
        } else if elapsed >= LOGO_AT {
            IntroStage::Logo
        } else if elapsed >= RING_AT {
            IntroStage::Ring
        } else {
            IntroStage::Dark
        }
    }
}

#[derive(Debug, Clone)]
struct RainDrop {
    /// Horizontal position as a fraction of the screen width.
    column: f32,
    /// Offset into the fall cycle, in seconds.
    offset: f32,
    /// Seconds for one full fall.
    period: f32,
    glyphs: String,
}

impl RainDrop {
    fn random(rng: &mut impl Rng) -> Self {
        let len = rng.random_range(4..8);
        let glyphs = (0..len)
            .map(|_| RAIN_ALPHABET[rng.random_range(0..RAIN_ALPHABET.len())] as char)
            .collect();
        Self {
            column: rng.random_range(0.0..1.0),
            offset: rng.random_range(0.0..4.0),
            period: rng.random_range(2.5..5.0),
            glyphs,
        }
    }

    /// Row of the head of the drop, as a fraction of the screen height.
    fn progress(&self, elapsed: Duration) -> f32 {
        ((elapsed.as_secs_f32() + self.offset) / self.period).fract()
    }
}

#[derive(Debug)]
pub struct IntroScreen {
    started: Instant,
    rain: Vec<RainDrop>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum IntroAction {
    Skip,
    Quit,
}

impl IntroScreen {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            started: Instant::now(),
            rain: (0..RAIN_COLUMNS).map(|_| RainDrop::random(&mut rng)).collect(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn stage(&self) -> IntroStage {
        IntroStage::at(self.elapsed())
    }

    pub fn is_done(&self) -> bool {
        self.stage() == IntroStage::Done
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<IntroAction> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(IntroAction::Quit),
            _ => Some(IntroAction::Skip),
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let elapsed = self.elapsed();
        let stage = IntroStage::at(elapsed);

        f.render_widget(Block::default().style(Style::default().bg(CYBER_DARK)), area);
        self.draw_rain(f, area, elapsed);

        let vsplit = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(9),
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Percentage(10),
            ])
            .split(area);
        let hsplit = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(30),
                Constraint::Min(0),
            ])
            .split(vsplit[1]);
        let core = hsplit[1];

        if stage >= IntroStage::Ring {
            let border_color = if stage >= IntroStage::Glow {
                glow_color(elapsed)
            } else {
                NEON_PINK
            };
            let ring = Block::default()
                .borders(Borders::ALL)
                .border_type(if stage >= IntroStage::Glow {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(border_color));
            let inner = ring.inner(core);
            f.render_widget(ring, core);

            if stage >= IntroStage::Logo {
                let logo = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(""),
                    Line::from(""),
                    Line::from(Span::styled(
                        LOGO_TEXT,
                        Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD),
                    )),
                ])
                .alignment(Alignment::Center);
                f.render_widget(logo, inner);
            }
        }

        if stage >= IntroStage::Logo {
            let dots = (elapsed.as_millis() / 300 % 4) as usize;
            let loading = Paragraph::new(vec![
                Line::from(Span::styled(
                    "INITIALIZING AI SYSTEMS...",
                    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{:<3}", "●".repeat(dots)),
                    Style::default().fg(NEON_CYAN),
                )),
            ])
            .alignment(Alignment::Center);
            f.render_widget(loading, vsplit[3]);
        }
    }

    fn draw_rain(&self, f: &mut Frame, area: Rect, elapsed: Duration) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(Color::Rgb(0, 110, 92));
        for drop in &self.rain {
            let x = area.x + ((drop.column * area.width as f32) as u16).min(area.width - 1);
            let head = (drop.progress(elapsed) * area.height as f32) as u16;
            for (i, glyph) in drop.glyphs.chars().enumerate() {
                let Some(row) = head.checked_sub(i as u16) else {
                    break;
                };
                if row >= area.height {
                    continue;
                }
                f.render_widget(
                    Paragraph::new(Span::styled(glyph.to_string(), style)),
                    Rect {
                        x,
                        y: area.y + row,
                        width: 1,
                        height: 1,
                    },
                );
            }
        }
    }
}

impl Default for IntroScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulses between cyan and a dimmer teal every second.
fn glow_color(elapsed: Duration) -> Color {
    if (elapsed.as_millis() / 500) % 2 == 0 {
        NEON_CYAN
    } else {
        Color::Rgb(0, 170, 142)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_boundaries() {
        let ms = Duration::from_millis;
        assert_eq!(IntroStage::at(ms(0)), IntroStage::Dark);
        assert_eq!(IntroStage::at(ms(999)), IntroStage::Dark);
        assert_eq!(IntroStage::at(ms(1000)), IntroStage::Ring);
        assert_eq!(IntroStage::at(ms(2499)), IntroStage::Ring);
        assert_eq!(IntroStage::at(ms(2500)), IntroStage::Logo);
        assert_eq!(IntroStage::at(ms(4000)), IntroStage::Glow);
        assert_eq!(IntroStage::at(ms(5499)), IntroStage::Glow);
        assert_eq!(IntroStage::at(ms(5500)), IntroStage::Done);
    }

    #[test]
    fn test_any_key_skips_and_ctrl_c_quits() {
        let mut intro = IntroScreen::new();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(intro.handle_input(key), Some(IntroAction::Skip));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(intro.handle_input(ctrl_c), Some(IntroAction::Quit));
    }

    #[test]
    fn test_rain_progress_stays_in_unit_range() {
        let intro = IntroScreen::new();
        assert_eq!(intro.rain.len(), RAIN_COLUMNS);
        for drop in &intro.rain {
            let p = drop.progress(Duration::from_millis(3333));
            assert!((0.0..1.0).contains(&p));
            assert!((4..8).contains(&drop.glyphs.len()));
        }
    }
}
