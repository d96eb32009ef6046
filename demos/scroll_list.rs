//! Scroll List Example - A scrolled box layout in the terminal
//!
//! This example demonstrates:
//! - A vertical BoxLayout with an expanding, scrolled list in the middle
//! - Keyboard and mouse wheel scrolling through the list's adjustment
//! - Driving the stage's update cycle and drawing the recorded paint ops
//!
//! Keys: Up/Down, PageUp/PageDown, Home/End, q to quit.
//! Set RUST_LOG=spark_box=debug to write layout logs to scroll_list.log.
//!
//! Run with: cargo run --example scroll_list

use std::fs::File;
use std::io::{self, stdout, Write};
use std::rc::Rc;
use std::sync::Mutex;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing_subscriber::EnvFilter;

use spark_box::{
    scroll_page, scroll_step, scroll_to_end, scroll_to_start, Adjustment, BoxChildMeta,
    BoxLayout, BoxProps, Container, Insets, Label, PaintContext, PaintOp, Rgba, Stage, ThemeNode,
    WHEEL_STEPS,
};

fn to_color(c: Rgba) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

/// Draw a frame's paint ops, clipped to the terminal.
fn render(out: &mut impl Write, frame: &PaintContext, cols: u16, rows: u16) -> io::Result<()> {
    queue!(out, ResetColor, Clear(ClearType::All))?;

    for op in frame.ops() {
        match op {
            PaintOp::FillRect { rect, color } => {
                let x1 = rect.x1.max(0.0) as u16;
                let x2 = (rect.x2.max(0.0) as u16).min(cols);
                if x2 <= x1 {
                    continue;
                }
                let blank = " ".repeat(usize::from(x2 - x1));
                queue!(out, SetBackgroundColor(to_color(*color)))?;
                for y in rect.y1.max(0.0) as u16..(rect.y2.max(0.0) as u16).min(rows) {
                    queue!(out, MoveTo(x1, y), Print(&blank))?;
                }
            }
            PaintOp::Text { x, y, lines, color } => {
                queue!(out, SetForegroundColor(to_color(*color)))?;
                for (i, line) in lines.iter().enumerate() {
                    let row = *y + i as f32;
                    if row < 0.0 || row >= f32::from(rows) || *x < 0.0 {
                        continue;
                    }
                    queue!(out, MoveTo(*x as u16, row as u16), Print(line))?;
                }
            }
        }
    }

    queue!(out, ResetColor)?;
    out.flush()
}

fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    if let Ok(file) = File::create("scroll_list.log") {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
}

fn main() -> io::Result<()> {
    init_logging();

    let (cols, rows) = size()?;
    let stage = Stage::new(f32::from(cols), f32::from(rows));

    let root = Rc::new(BoxLayout::with_props(BoxProps {
        name: Some("root".to_string()),
        vertical: true,
        spacing: 1,
        theme: ThemeNode::default().background(Rgba::rgb(20, 20, 30)),
        ..Default::default()
    }));

    let scroll = Adjustment::new(0.0, 0.0, 1.0, 1.0, 1.0, 1.0);
    let list = Rc::new(BoxLayout::with_props(BoxProps {
        name: Some("list".to_string()),
        vertical: true,
        vadjustment: Some(scroll.clone()),
        theme: ThemeNode::default()
            .padding(Insets::symmetric(0.0, 2.0))
            .background(Rgba::rgb(35, 35, 55)),
        ..Default::default()
    }));

    for i in 0..100 {
        let color = if i % 2 == 0 { Rgba::WHITE } else { Rgba::GRAY };
        list.add(Rc::new(
            Label::new(format!("{i:>3}  row number {i} of a long scrolled list")).with_color(color),
        ));
    }

    let status = Rc::new(Label::new("").with_color(Rgba::GREEN));

    root.add(Rc::new(Label::new("spark-box scroll list").with_color(Rgba::rgb(120, 180, 255))));
    root.pack(list.clone(), BoxChildMeta::default().expand(true));
    root.add(status.clone());
    stage.add(root.clone());

    {
        let status = status.clone();
        scroll.connect_value_changed(move |adj| {
            status.set_text(format!(
                "offset {:.0} / {:.0}  -  arrows, pgup/pgdn, home/end, q",
                adj.value(),
                adj.upper() - adj.page_size()
            ));
        });
    }
    status.set_text("arrows, pgup/pgdn, home/end, q");

    let mut out = stdout();
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = (|| -> io::Result<()> {
        loop {
            if let Some(frame) = stage.update() {
                let (cols, rows) = stage.size();
                render(&mut out, &frame, cols as u16, rows as u16)?;
            }

            match read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Down => {
                        scroll_step(&scroll, 1);
                    }
                    KeyCode::Up => {
                        scroll_step(&scroll, -1);
                    }
                    KeyCode::PageDown => {
                        scroll_page(&scroll, 1);
                    }
                    KeyCode::PageUp => {
                        scroll_page(&scroll, -1);
                    }
                    KeyCode::Home => scroll_to_start(&scroll),
                    KeyCode::End => scroll_to_end(&scroll),
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => {
                        scroll_step(&scroll, WHEEL_STEPS);
                    }
                    MouseEventKind::ScrollUp => {
                        scroll_step(&scroll, -WHEEL_STEPS);
                    }
                    _ => {}
                },
                Event::Resize(cols, rows) => stage.set_size(f32::from(cols), f32::from(rows)),
                _ => {}
            }
        }
    })();

    execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}
