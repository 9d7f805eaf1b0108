//! Rendering layer. All terminal drawing lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates the
//! logical play field into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use hacker_runner::assets::{Assets, Sprite, SpriteId};
use hacker_runner::collision::Rect;
use hacker_runner::config::PlayerConfig;
use hacker_runner::entities::{Entity, EntityKind, GameState, PowerKind};
use hacker_runner::player::collision_box;
use hacker_runner::score::{hud, SessionResult};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkCyan;
const C_HUD_SCORE: Color = Color::Cyan;
const C_HUD_PACKETS: Color = Color::Yellow;
const C_HUD_BEST: Color = Color::DarkGrey;
const C_GROUND: Color = Color::DarkGreen;
const C_GROUND_STRIPE: Color = Color::Green;
const C_PLAYER: Color = Color::Cyan;
const C_FIREWALL: Color = Color::Red;
const C_DRONE: Color = Color::Magenta;
const C_PACKET: Color = Color::Yellow;
const C_VPN: Color = Color::Green;
const C_SPEEDHACK: Color = Color::Blue;
const C_HINT: Color = Color::DarkGrey;

const BAR_WIDTH: u16 = 16;

/// Everything the renderer needs besides the state itself.
pub struct View<'a> {
    pub assets: &'a Assets,
    pub player_cfg: &'a PlayerConfig,
    pub best: u32,
    /// Present once the session is over.
    pub result: Option<&'a SessionResult>,
}

// ── Field → terminal mapping ──────────────────────────────────────────────────

/// Maps logical coordinates onto the cells inside the border.
struct Grid {
    cols: u16,
    rows: u16,
    sx: f64,
    sy: f64,
}

impl Grid {
    fn new(state: &GameState) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let inner_w = cols.saturating_sub(2).max(1) as f64;
        let inner_h = rows.saturating_sub(4).max(1) as f64;
        Ok(Self {
            cols,
            rows,
            sx: inner_w / state.width,
            sy: inner_h / state.height,
        })
    }

    fn col(&self, x: f64) -> i32 {
        1 + (x * self.sx).floor() as i32
    }

    fn row(&self, y: f64) -> i32 {
        2 + (y * self.sy).floor() as i32
    }

    /// Cell span `(col, row, w, h)` covered by `r`, at least one cell each way.
    fn span(&self, r: &Rect) -> (i32, i32, i32, i32) {
        let c0 = self.col(r.x);
        let r0 = self.row(r.y);
        let c1 = self.col(r.right()).max(c0 + 1);
        let r1 = self.row(r.bottom()).max(r0 + 1);
        (c0, r0, c1 - c0, r1 - r0)
    }

    fn inside(&self, col: i32, row: i32) -> bool {
        col >= 1 && row >= 2 && col < self.cols as i32 - 1 && row < self.rows as i32 - 2
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: &View) -> std::io::Result<()> {
    let grid = Grid::new(state)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &grid)?;
    draw_ground(out, &grid, state)?;

    for e in state
        .obstacles
        .iter()
        .chain(&state.drones)
        .chain(&state.packets)
        .chain(&state.powerups)
    {
        draw_entity(out, &grid, e, view.assets)?;
    }
    draw_player(out, &grid, state, view)?;
    draw_hud(out, &grid, state, view.best)?;
    draw_controls_hint(out, &grid)?;

    if let Some(result) = view.result {
        draw_game_over(out, &grid, result)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, grid.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Start overlay, shown before the first session and from the game-over menu.
pub fn render_menu<W: Write>(out: &mut W, best: u32, packet_bonus: u32) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let legend = format!("■ packet +{}   ◆ VPN shield   ◇ speedhack", packet_bonus);
    let lines: &[(&str, Color)] = &[
        ("▓▓  HACKER  RUNNER  ▓▓", Color::Cyan),
        ("", Color::Reset),
        ("SPACE / ↑ / W : Jump over firewalls", Color::White),
        ("↓ / S         : Slide under drones", Color::White),
        ("Click / drag down works too", Color::DarkGrey),
        ("", Color::Reset),
        (legend.as_str(), Color::Yellow),
        ("", Color::Reset),
        ("ENTER : Start   Q : Quit", Color::Green),
    ];
    let start = cy.saturating_sub(lines.len() as u16 / 2 + 1);
    for (i, (msg, color)) in lines.iter().enumerate() {
        put_centered(out, cx, start + i as u16, msg, *color)?;
    }
    if best > 0 {
        let best_line = format!("Best: {}", best);
        put_centered(out, cx, start + lines.len() as u16 + 1, &best_line, C_HUD_BEST)?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Border & ground ───────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    let w = grid.cols as usize;
    let h = grid.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(grid.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

/// Ground line plus stripes that drift left with the distance travelled.
fn draw_ground<W: Write>(out: &mut W, grid: &Grid, state: &GameState) -> std::io::Result<()> {
    let row = grid.row(state.ground_y);
    let width = grid.cols.saturating_sub(2) as i32;
    let shift = (state.distance * 10.0) as i32;
    for r in row..grid.rows as i32 - 2 {
        if !grid.inside(1, r) {
            continue;
        }
        out.queue(cursor::MoveTo(1, r as u16))?;
        let line: String = (0..width)
            .map(|c| {
                if r == row {
                    '▀'
                } else if (c + shift).rem_euclid(6) < 4 && r == row + 1 {
                    '─'
                } else {
                    ' '
                }
            })
            .collect();
        let color = if r == row { C_GROUND } else { C_GROUND_STRIPE };
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn entity_style(kind: EntityKind) -> (Color, char) {
    match kind {
        EntityKind::Obstacle => (C_FIREWALL, '█'),
        EntityKind::Drone => (C_DRONE, '▒'),
        EntityKind::Packet => (C_PACKET, '■'),
        EntityKind::PowerUp(PowerKind::Shield) => (C_VPN, '◆'),
        EntityKind::PowerUp(PowerKind::SlowMo) => (C_SPEEDHACK, '◇'),
    }
}

fn draw_entity<W: Write>(
    out: &mut W,
    grid: &Grid,
    entity: &Entity,
    assets: &Assets,
) -> std::io::Result<()> {
    let (color, fill) = entity_style(entity.kind);
    let cells = grid.span(&entity.rect());
    out.queue(style::SetForegroundColor(color))?;
    match assets.sprite(SpriteId::for_kind(entity.kind)) {
        Some(sprite) => draw_sprite(out, grid, cells, sprite),
        None => fill_cells(out, grid, cells, fill),
    }
}

fn draw_player<W: Write>(
    out: &mut W,
    grid: &Grid,
    state: &GameState,
    view: &View,
) -> std::io::Result<()> {
    let cells = grid.span(&collision_box(&state.player, view.player_cfg));
    let color = match state.active_power.as_ref().map(|p| p.kind) {
        Some(PowerKind::Shield) => C_VPN,
        Some(PowerKind::SlowMo) => C_SPEEDHACK,
        None => C_PLAYER,
    };
    out.queue(style::SetForegroundColor(color))?;
    match view.assets.sprite(SpriteId::Runner) {
        Some(sprite) => draw_sprite(out, grid, cells, sprite),
        None => fill_cells(out, grid, cells, '▓'),
    }
}

fn fill_cells<W: Write>(
    out: &mut W,
    grid: &Grid,
    (col, row, w, h): (i32, i32, i32, i32),
    fill: char,
) -> std::io::Result<()> {
    for r in row..row + h {
        for c in col..col + w {
            if grid.inside(c, r) {
                out.queue(cursor::MoveTo(c as u16, r as u16))?;
                out.queue(Print(fill))?;
            }
        }
    }
    Ok(())
}

/// Blit a sprite anchored at the top-left cell, clipped to the entity's span.
fn draw_sprite<W: Write>(
    out: &mut W,
    grid: &Grid,
    (col, row, w, h): (i32, i32, i32, i32),
    sprite: &Sprite,
) -> std::io::Result<()> {
    for (dy, line) in sprite.rows.iter().take(h as usize).enumerate() {
        for (dx, ch) in line.chars().take(w as usize).enumerate() {
            let (c, r) = (col + dx as i32, row + dy as i32);
            if ch != ' ' && grid.inside(c, r) {
                out.queue(cursor::MoveTo(c as u16, r as u16))?;
                out.queue(Print(ch))?;
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    grid: &Grid,
    state: &GameState,
    best: u32,
) -> std::io::Result<()> {
    let snapshot = hud(state);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("SCORE: {:>6}", snapshot.score)))?;
    out.queue(style::SetForegroundColor(C_HUD_PACKETS))?;
    out.queue(Print(format!("  PACKETS: {:>3}", snapshot.packets)))?;
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    out.queue(Print(format!("  BEST: {:>6}", best)))?;

    // Power-up countdown, right side: "VPN 3s [████░░░░]"
    if let Some(power) = snapshot.power {
        let color = match power.kind {
            PowerKind::Shield => C_VPN,
            PowerKind::SlowMo => C_SPEEDHACK,
        };
        let filled = (power.fraction * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{} {}s [{}{}]",
            power.kind.label(),
            power.seconds_left,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH as usize - filled.min(BAR_WIDTH as usize)),
        );
        let x = grid.cols.saturating_sub(bar.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(x, 0))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(bar))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, grid.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE/↑ : Jump   ↓/S : Slide   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    grid: &Grid,
    result: &SessionResult,
) -> std::io::Result<()> {
    let score_line = format!("Score: {:>6}", result.score);
    let best_line = if result.new_best {
        format!("★ NEW BEST: {:>6} ★", result.best)
    } else {
        format!("Best:  {:>6}", result.best)
    };
    let best_color = if result.new_best {
        Color::Yellow
    } else {
        Color::DarkGrey
    };

    let lines: Vec<(String, Color)> = vec![
        ("╔════════════════════╗".into(), Color::Red),
        ("║   CONNECTION LOST  ║".into(), Color::Red),
        ("╚════════════════════╝".into(), Color::Red),
        (score_line, Color::Yellow),
        (best_line, best_color),
        ("R - Retry  M - Menu  Q - Quit".into(), Color::White),
    ];

    let cx = grid.cols / 2;
    let start_row = (grid.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        put_centered(out, cx, start_row + i as u16, msg, *color)?;
    }
    Ok(())
}

fn put_centered<W: Write>(
    out: &mut W,
    cx: u16,
    row: u16,
    msg: &str,
    color: Color,
) -> std::io::Result<()> {
    if msg.is_empty() {
        return Ok(());
    }
    let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}
