//! Demo screen: a character sheet with Skills, Quests and Logs tabs
//!
//! Everything here is an ordinary consumer of the panel engine. State
//! shared between panels (attribute points, experience) lives behind
//! `Rc<RefCell<_>>` and is only borrowed for the duration of one call.

use crate::config::Config;
use crate::logging::{LogBuffer, LogLevel};
use crate::ui::color::Argb;
use crate::ui::draw::{outline, DrawContext, Metrics, TextMetrics};
use crate::ui::error::Result;
use crate::ui::geometry::{Point, Rect};
use crate::ui::panel::Panel;
use crate::ui::screen::{PanelRegistry, Screen, ScreenContent, ScreenLayout};
use crate::ui::scrollable_panel::{wrap_text, ScrollablePanel};
use crate::ui::tab::{Tab, TabContent, TabPanels};
use crate::ui::tab_manager::TabManager;
use crate::ui::traits::{Element, Handled, MouseButton, ScrollContent, ScrollView};
use crate::ui::widgets::{Button, Paragraph, ProgressBar, TextList};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const XP_PER_LEVEL: u32 = 100;
const POINTS_PER_LEVEL: u32 = 3;
const TRAIN_XP: u32 = 35;
const STARTING_POINTS: u32 = 5;

const ROW_HEIGHT: i32 = 2;
/// Points line plus a blank row above the attribute rows
const SHEET_HEADER: i32 = 2;
const TOOLTIP_WIDTH: i32 = 28;

const GOLD: Argb = Argb(0xFFFF_CC00);
const GREEN: Argb = Argb(0xFF55_FF55);
const MUTED: Argb = Argb(0xFFAA_AAAA);
const TEXT: Argb = Argb(0xFFE0_E0E0);
const TOOLTIP_BG: Argb = Argb(0xF010_0010);
const TOOLTIP_BORDER: Argb = Argb(0xFF50_00FF);

// ─────────────────────────────────────────────────────────────────────────────
// Character state
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub level: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub level: u32,
    pub xp: u32,
    pub points: u32,
    pub attributes: Vec<Attribute>,
}

impl Default for Character {
    fn default() -> Self {
        let attribute = |name, level, description| Attribute {
            name,
            level,
            description,
        };
        Self {
            level: 1,
            xp: 0,
            points: STARTING_POINTS,
            attributes: vec![
                attribute("Strength", 10, "Increases physical damage and carrying capacity"),
                attribute("Dexterity", 8, "Improves attack speed and evasion"),
                attribute("Vitality", 12, "Increases health points and stamina recovery"),
                attribute("Intelligence", 7, "Improves magic damage and mana capacity"),
                attribute("Faith", 5, "Enhances healing abilities and light magic"),
                attribute("Endurance", 9, "Increases stamina and equipment load"),
                attribute("Luck", 6, "Improves item drop rates and critical hit chance"),
            ],
        }
    }
}

impl Character {
    /// Raise attribute `index` by one if a point is available
    pub fn spend_point(&mut self, index: usize) -> bool {
        if self.points == 0 {
            return false;
        }
        let Some(attribute) = self.attributes.get_mut(index) else {
            return false;
        };
        attribute.level += 1;
        self.points -= 1;
        tracing::info!(
            attribute = attribute.name,
            level = attribute.level,
            "{} raised to {}",
            attribute.name,
            attribute.level
        );
        true
    }

    /// Add experience; returns the number of levels gained
    pub fn gain_xp(&mut self, amount: u32) -> u32 {
        self.xp += amount;
        let gained = self.xp / XP_PER_LEVEL;
        self.xp %= XP_PER_LEVEL;
        if gained > 0 {
            self.level += gained;
            self.points += gained * POINTS_PER_LEVEL;
            tracing::info!(level = self.level, "reached level {}", self.level);
        }
        gained
    }

    pub fn xp_fraction(&self) -> f32 {
        self.xp as f32 / XP_PER_LEVEL as f32
    }
}

pub type SharedCharacter = Rc<RefCell<Character>>;

// ─────────────────────────────────────────────────────────────────────────────
// Skills tab
// ─────────────────────────────────────────────────────────────────────────────

/// Attribute rows with a `+` button each
struct SkillSheet {
    character: SharedCharacter,
    buttons: Vec<Button>,
    /// Row under the pointer during the last render
    hovered: Rc<Cell<Option<usize>>>,
}

impl SkillSheet {
    fn new(character: SharedCharacter, metrics: &Metrics, hovered: Rc<Cell<Option<usize>>>) -> Self {
        let count = character.borrow().attributes.len();
        let buttons = (0..count)
            .map(|index| {
                let character = character.clone();
                Button::new(Rect::new(0, 0, 3, 1), "+", metrics.clone())
                    .with_shadow(false)
                    .on_click(move || {
                        character.borrow_mut().spend_point(index);
                    })
            })
            .collect();
        Self {
            character,
            buttons,
            hovered,
        }
    }

    fn row_y(view: &ScrollView, index: usize) -> i32 {
        view.top() + SHEET_HEADER + index as i32 * ROW_HEIGHT
    }
}

impl ScrollContent for SkillSheet {
    fn measure(&mut self, _inner_width: i32) -> Option<i32> {
        Some(SHEET_HEADER + self.buttons.len() as i32 * ROW_HEIGHT)
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, view: ScrollView, mouse: Point, delta: f32) -> Result<()> {
        let (points, rows) = {
            let character = self.character.borrow();
            let rows: Vec<(&'static str, u32)> = character
                .attributes
                .iter()
                .map(|a| (a.name, a.level))
                .collect();
            (character.points, rows)
        };

        let x = view.viewport.x;
        let right = x + view.inner_width;
        let top = view.top();
        if view.is_visible(top, 1) {
            let color = if points > 0 { GREEN } else { MUTED };
            ctx.draw_text(&format!("Available points: {points}"), x, top, color, true);
        }

        self.hovered.set(None);
        for (index, (button, (name, level))) in self.buttons.iter_mut().zip(rows).enumerate() {
            let y = Self::row_y(&view, index);
            // bounds are kept current even for hidden rows so stale
            // positions can never catch a click
            button.set_bounds(Rect::new(right - 3, y, 3, 1));
            button.set_enabled(points > 0);

            let row = Rect::new(x, y, view.inner_width, 1);
            if view.viewport.contains(mouse) && row.contains(mouse) {
                self.hovered.set(Some(index));
            }
            if !view.is_visible(y, 1) {
                continue;
            }

            ctx.draw_text(name, x, y, TEXT, true);
            let level = level.to_string();
            ctx.draw_text(&level, right - 5 - level.len() as i32, y, GOLD, true);
            button.render(ctx, mouse, delta);
        }
        Ok(())
    }

    fn mouse_clicked(&mut self, _view: ScrollView, mouse: Point, button: MouseButton) -> Handled {
        for b in &mut self.buttons {
            if b.mouse_clicked(mouse, button).was_handled() {
                return Handled::Yes;
            }
        }
        Handled::No
    }
}

/// Progress bar following the character's experience
struct XpPanel {
    bar: ProgressBar,
    character: SharedCharacter,
}

impl Element for XpPanel {
    fn bounds(&self) -> Rect {
        self.bar.bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bar.set_bounds(bounds);
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, delta: f32) {
        let (level, xp, fraction) = {
            let c = self.character.borrow();
            (c.level, c.xp, c.xp_fraction())
        };
        self.bar.set_progress(fraction);
        self.bar.set_value_text(format!("{xp} / {XP_PER_LEVEL} XP"));
        self.bar.render(ctx, mouse, delta);

        let below = self.bar.bar_rect();
        ctx.draw_text(&format!("Level {level}"), below.x, below.bottom(), GOLD, true);
    }
}

struct SkillsTab {
    character: SharedCharacter,
    config: Rc<Config>,
    metrics: Metrics,
    hovered: Rc<Cell<Option<usize>>>,
    area: Rect,
}

impl SkillsTab {
    fn new(character: SharedCharacter, config: Rc<Config>, metrics: Metrics) -> Self {
        Self {
            character,
            config,
            metrics,
            hovered: Rc::new(Cell::new(None)),
            area: Rect::default(),
        }
    }
}

impl TabContent for SkillsTab {
    fn build(&mut self, panels: &mut TabPanels<'_>) {
        let area = panels.area();
        let metrics = panels.metrics().clone();
        self.area = area;

        let left_width = area.width * 3 / 5;
        let sheet = Panel::titled(
            Rect::new(area.x + 1, area.y, left_width - 1, area.height - 1),
            "Character Attributes",
            metrics.clone(),
        )
        .with_style(self.config.panel.style());
        let sheet = ScrollablePanel::new(
            sheet,
            SkillSheet::new(self.character.clone(), &metrics, self.hovered.clone()),
        )
        .with_scrollbar(self.config.scroll.scrollbar_style())
        .with_scroll(self.config.scroll.scroll_state());
        panels.add(Box::new(sheet));

        let right_x = area.x + left_width + 1;
        let right_width = area.width - left_width - 2;
        let mut bar = ProgressBar::titled(Rect::new(right_x, area.y, right_width, 9), "Experience", metrics.clone())
            .with_panel_style(self.config.panel.style())
            .with_bar_height(3);
        bar.set_smooth_animation(self.config.progress.smooth_animation);
        panels.add(Box::new(XpPanel {
            bar,
            character: self.character.clone(),
        }));

        let character = self.character.clone();
        let train = Button::new(Rect::new(right_x, area.y + 10, right_width.min(16), 3), "Train", metrics)
            .with_shadow(false)
            .on_click(move || {
                character.borrow_mut().gain_xp(TRAIN_XP);
            });
        panels.add(Box::new(train));
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, mouse: Point, _delta: f32) {
        let Some(index) = self.hovered.get() else {
            return;
        };
        let character = self.character.borrow();
        let Some(attribute) = character.attributes.get(index) else {
            return;
        };
        draw_tooltip(ctx, self.metrics.as_ref(), self.area, mouse, attribute.description);
    }
}

/// Wrapped text box next to the pointer, kept inside `area`
fn draw_tooltip(
    ctx: &mut dyn DrawContext,
    metrics: &dyn TextMetrics,
    area: Rect,
    mouse: Point,
    text: &str,
) {
    let lines = wrap_text(metrics, text, TOOLTIP_WIDTH);
    let width = lines.iter().map(|l| metrics.text_width(l)).max().unwrap_or(0) + 2;
    let height = lines.len() as i32 * metrics.font_height() + 2;

    let mut x = mouse.x as i32 + 2;
    let mut y = mouse.y as i32 + 1;
    if x + width > area.right() {
        x = (mouse.x as i32 - width - 1).max(area.x);
    }
    if y + height > area.bottom() {
        y = (area.bottom() - height).max(area.y);
    }

    let rect = Rect::new(x, y, width, height);
    ctx.fill(rect, TOOLTIP_BG);
    outline(ctx, rect, TOOLTIP_BORDER);
    for (i, line) in lines.iter().enumerate() {
        ctx.draw_text(line, x + 1, y + 1 + i as i32 * metrics.font_height(), TEXT, false);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quests tab
// ─────────────────────────────────────────────────────────────────────────────

struct Quest {
    title: &'static str,
    description: &'static str,
    difficulty: u8,
    completed: bool,
}

const QUESTS: &[Quest] = &[
    Quest {
        title: "The Lost Artifact",
        description: "Find the ancient artifact hidden in the abandoned temple.",
        difficulty: 2,
        completed: false,
    },
    Quest {
        title: "Goblin Threat",
        description: "Defeat 10 goblins terrorizing the local village. (3/10)",
        difficulty: 1,
        completed: false,
    },
    Quest {
        title: "Echoes Below",
        description: "Follow the miners' tunnel past the flooded gallery and report what waits at the bottom.",
        difficulty: 3,
        completed: false,
    },
    Quest {
        title: "Supply Run",
        description: "Carry three crates of grain from the mill to the northern outpost before nightfall.",
        difficulty: 0,
        completed: false,
    },
    Quest {
        title: "First Steps",
        description: "Complete the tutorial and meet with the village elder.",
        difficulty: 0,
        completed: true,
    },
    Quest {
        title: "A Warm Hearth",
        description: "Gather firewood for the innkeeper.",
        difficulty: 0,
        completed: true,
    },
];

fn difficulty_color(difficulty: u8) -> Argb {
    match difficulty {
        0 => Argb(0xFF55_FF55),
        1 => Argb(0xFFFF_FF55),
        2 => Argb(0xFFFF_AA00),
        _ => Argb(0xFFFF_5555),
    }
}

fn quest_paragraphs() -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    for (heading, completed) in [("ACTIVE QUESTS", false), ("COMPLETED QUESTS", true)] {
        paragraphs.push(Paragraph {
            text: heading.to_string(),
            color: GOLD,
        });
        for quest in QUESTS.iter().filter(|q| q.completed == completed) {
            let status = if quest.completed { "Completed" } else { "In Progress" };
            let stars = "*".repeat(quest.difficulty as usize + 1);
            paragraphs.push(Paragraph {
                text: format!("{} [{stars}] - {status}", quest.title),
                color: if quest.completed { MUTED } else { difficulty_color(quest.difficulty) },
            });
            paragraphs.push(Paragraph {
                text: quest.description.to_string(),
                color: TEXT,
            });
        }
    }
    paragraphs
}

struct QuestsTab {
    config: Rc<Config>,
}

impl TabContent for QuestsTab {
    fn build(&mut self, panels: &mut TabPanels<'_>) {
        let area = panels.area();
        let metrics = panels.metrics().clone();

        let left_width = area.width * 3 / 5;
        let panel = Panel::titled(
            Rect::new(area.x + 1, area.y, left_width - 1, area.height - 1),
            "Quests",
            metrics.clone(),
        )
        .with_style(self.config.panel.style());
        let mut list = TextList::new(metrics.clone()).with_paragraph_gap(1);
        list.set_paragraphs(quest_paragraphs());
        let quests = ScrollablePanel::new(panel, list)
            .with_scrollbar(self.config.scroll.scrollbar_style())
            .with_scroll(self.config.scroll.scroll_state());
        panels.add(Box::new(quests));

        let done = QUESTS.iter().filter(|q| q.completed).count();
        let mut journey = ProgressBar::titled(
            Rect::new(area.x + left_width + 1, area.y, area.width - left_width - 2, 8),
            "Journey",
            metrics,
        )
        .with_panel_style(self.config.panel.style())
        .with_bar_height(3);
        journey.set_smooth_animation(self.config.progress.smooth_animation);
        journey.set_progress(done as f32 / QUESTS.len() as f32);
        journey.set_value_text(format!("{done} / {}", QUESTS.len()));
        journey.set_show_percent(true);
        panels.add(Box::new(journey));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logs tab
// ─────────────────────────────────────────────────────────────────────────────

fn level_color(level: LogLevel) -> Argb {
    match level {
        LogLevel::Error => Argb(0xFFFF_5555),
        LogLevel::Warn => Argb(0xFFFF_FF55),
        LogLevel::Info => TEXT,
        LogLevel::Debug => MUTED,
        LogLevel::Trace => Argb(0xFF66_6666),
    }
}

/// Captured tracing output, newest first
struct LogView {
    buffer: LogBuffer,
}

impl ScrollContent for LogView {
    fn measure(&mut self, _inner_width: i32) -> Option<i32> {
        Some(self.buffer.len() as i32)
    }

    fn render(&mut self, ctx: &mut dyn DrawContext, view: ScrollView, _mouse: Point, _delta: f32) -> Result<()> {
        let entries = self.buffer.get_all();
        let top = view.top();
        let first = view.offset.max(0.0) as usize;
        let visible = view.viewport.height.max(0) as usize + 1;

        for (row, entry) in entries.iter().rev().enumerate().skip(first).take(visible) {
            let y = top + row as i32;
            ctx.draw_text(&entry.display_line(), view.viewport.x, y, level_color(entry.level), false);
        }
        Ok(())
    }
}

struct LogsTab {
    buffer: LogBuffer,
    config: Rc<Config>,
}

impl TabContent for LogsTab {
    fn build(&mut self, panels: &mut TabPanels<'_>) {
        let area = panels.area();
        let panel = Panel::titled(
            Rect::new(area.x + 1, area.y, area.width - 2, area.height - 1),
            "Logs",
            panels.metrics().clone(),
        )
        .with_style(self.config.panel.style());
        let logs = ScrollablePanel::new(
            panel,
            LogView {
                buffer: self.buffer.clone(),
            },
        )
        .with_scrollbar(self.config.scroll.scrollbar_style())
        .with_scroll(self.config.scroll.scroll_state());
        panels.add(Box::new(logs));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Screen
// ─────────────────────────────────────────────────────────────────────────────

const HINT: &str = "q quit | 1-3 or click to switch tabs | wheel or drag to scroll";

/// Key hint along the bottom row
#[derive(Default)]
struct HintLine {
    area: Rect,
}

impl ScreenContent for HintLine {
    fn init_panels(&mut self, _registry: &mut PanelRegistry, area: Rect, _metrics: &Metrics) {
        self.area = area;
    }

    fn render_overlay(&mut self, ctx: &mut dyn DrawContext, _mouse: Point, _delta: f32) {
        ctx.draw_text(HINT, self.area.x + 1, self.area.bottom() - 1, MUTED, false);
    }
}

/// Tab ids in nav order; number keys select by position
pub const TAB_IDS: [&str; 3] = ["skills", "quests", "logs"];

/// Assemble the demo screen. Call `Screen::init` with the terminal size
/// before the first frame.
pub fn build_screen(config: &Config, metrics: Metrics, logs: LogBuffer) -> Result<Screen> {
    let config = Rc::new(config.clone());
    let character: SharedCharacter = Rc::new(RefCell::new(Character::default()));

    let mut tabs = TabManager::new(metrics.clone()).with_nav_style(config.nav.style());
    tabs.set_nav_height(config.nav.height);

    let mut screen = Screen::new("Character Sheet", metrics.clone())
        .with_layout(ScreenLayout {
            title_y: 0,
            nav_x: 1,
            nav_y: 1,
        })
        .with_content(Box::new(HintLine::default()));

    tabs.register_tab(
        Tab::new(
            TAB_IDS[0],
            "Skills",
            SkillsTab::new(character, config.clone(), metrics),
        ),
        screen.registry_mut(),
    )?;
    tabs.register_tab(
        Tab::new(
            TAB_IDS[1],
            "Quests",
            QuestsTab {
                config: config.clone(),
            },
        ),
        screen.registry_mut(),
    )?;
    tabs.register_tab(
        Tab::new(TAB_IDS[2], "Logs", LogsTab { buffer: logs, config }),
        screen.registry_mut(),
    )?;

    Ok(screen.with_tabs(tabs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::canvas::{BufferCanvas, CellMetrics};
    use crate::logging::LogEntry;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect as CellArea;

    fn demo() -> (Screen, LogBuffer) {
        let logs = LogBuffer::new();
        let mut screen = build_screen(&Config::default(), Rc::new(CellMetrics), logs.clone()).unwrap();
        screen.init(80, 30);
        (screen, logs)
    }

    fn frame(screen: &mut Screen, mouse: Point) -> Buffer {
        let mut buf = Buffer::empty(CellArea::new(0, 0, 80, 30));
        let mut canvas = BufferCanvas::new(&mut buf);
        screen.render(&mut canvas, mouse, 1.0);
        assert!(canvas.is_balanced());
        buf
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_character_spends_points() {
        let mut c = Character::default();
        assert!(c.spend_point(0));
        assert_eq!(c.attributes[0].level, 11);
        assert_eq!(c.points, STARTING_POINTS - 1);
        assert!(!c.spend_point(99));

        c.points = 0;
        assert!(!c.spend_point(0));
        assert_eq!(c.attributes[0].level, 11);
    }

    #[test]
    fn test_character_levels_up() {
        let mut c = Character::default();
        assert_eq!(c.gain_xp(90), 0);
        assert_eq!(c.gain_xp(TRAIN_XP), 1);
        assert_eq!(c.level, 2);
        assert_eq!(c.xp, 25);
        assert_eq!(c.points, STARTING_POINTS + POINTS_PER_LEVEL);
    }

    #[test]
    fn test_demo_starts_on_skills() {
        let (mut screen, _) = demo();
        assert_eq!(screen.tabs().and_then(|t| t.active_tab_id()), Some("skills"));
        let text = screen_text(&frame(&mut screen, Point::new(-1.0, -1.0)));
        assert!(text.contains("Character Sheet"));
        assert!(text.contains("Available points: 5"));
        assert!(text.contains("Strength"));
    }

    #[test]
    fn test_every_tab_renders_balanced() {
        let (mut screen, logs) = demo();
        logs.add(LogEntry {
            timestamp: chrono::Utc::now(),
            level: LogLevel::Warn,
            target: "test".to_string(),
            message: "hello from the log".to_string(),
        });
        for id in TAB_IDS {
            screen.select_tab(id);
            let text = screen_text(&frame(&mut screen, Point::new(10.0, 10.0)));
            if id == "logs" {
                assert!(text.contains("hello from the log"));
            }
            if id == "quests" {
                assert!(text.contains("ACTIVE QUESTS"));
            }
        }
    }

    #[test]
    fn test_plus_button_spends_a_point() {
        let (mut screen, _) = demo();
        let buf = frame(&mut screen, Point::new(-1.0, -1.0));

        // the first "+" on screen belongs to Strength
        let (x, y) = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .find(|&(x, y)| buf[(x, y)].symbol() == "+")
            .unwrap();
        let at = Point::new(x as f64, y as f64);
        assert_eq!(screen.mouse_clicked(at, MouseButton::Left), Handled::Yes);

        let text = screen_text(&frame(&mut screen, Point::new(-1.0, -1.0)));
        assert!(text.contains("Available points: 4"));
        assert!(text.contains("11"));
    }

    #[test]
    fn test_tooltip_follows_hovered_row() {
        let (mut screen, _) = demo();
        frame(&mut screen, Point::new(-1.0, -1.0));
        let buf = frame(&mut screen, Point::new(-1.0, -1.0));
        let text = screen_text(&buf);
        let row = text.lines().position(|l| l.contains("Strength")).unwrap();
        let col = text.lines().nth(row).and_then(|l| l.find("Strength")).unwrap();

        let hovered = frame(&mut screen, Point::new(col as f64, row as f64));
        assert!(screen_text(&hovered).contains("physical damage"));
    }
}
