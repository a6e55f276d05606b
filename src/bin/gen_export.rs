//! Synthetic WhatsApp export generator for stress testing chatstat.
//!
//! Usage: cargo run --features gen-export --bin gen_export -- [messages] [output] [layout]
//! Example: cargo run --features gen-export --bin gen_export -- 100000 heavy_chat.txt ios-12h

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

use chatstat::format::FormatSpec;

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "😘", "🤔", "🙄", "😱", "🤯", "💀", "👻", "🔥", "👍", "👍🏽",
    "❤️", "💔", "🎉", "🇩🇪", "👨‍👩‍👧‍👦",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "+49 170 1234567",
    "🔥FireUser🔥",
    "Dr. Who",
];

const SYSTEM_NOTICES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.",
    "Alice created group \"Weekend plans\"",
    "Bob added Мария",
    "Иван left",
    "You changed the group description",
];

const LINKS: &[&str] = &[
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    "www.rust-lang.org",
    "github.com/rust-lang/regex",
    "http://example.com/a?b=c",
];

fn main() -> chatstat::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);
    let layout: FormatSpec = args.get(3).map_or("android-12h", String::as_str).parse()?;

    println!("chatstat export generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!("   Layout:   {layout}");
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();

    let start = Instant::now();
    let mut bytes_written: usize = 0;
    let mut ts = first_timestamp();

    for i in 0..count {
        ts += Duration::seconds(rng.gen_range(5..7_200));

        let body = if i % 50 == 0 {
            SYSTEM_NOTICES[(i / 50) % SYSTEM_NOTICES.len()].to_string()
        } else {
            let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Alice");
            format!("{sender}: {}", generate_message(&mut rng, i))
        };

        let line = format!("{}{body}\n", render_timestamp(layout, ts, i));
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            bytes_written += garbage.len();
            writer.write_all(garbage.as_bytes())?;
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\nDone!");
    println!("   Size:  {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    println!("   Speed: {:.0} msg/s", count as f64 / elapsed.as_secs_f64());

    Ok(())
}

fn first_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 11, 3)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default()
}

/// Renders the delimiter the way the given layout writes it, including the
/// locale quirks the parser has to clean up.
fn render_timestamp(layout: FormatSpec, ts: NaiveDateTime, index: usize) -> String {
    // Some locales put a narrow no-break space before the meridiem
    let space = if index % 7 == 0 { "\u{202f}" } else { " " };

    match layout {
        FormatSpec::Android12 => {
            let meridiem = ts.format("%p").to_string();
            let meridiem = if index % 3 == 0 { meridiem } else { meridiem.to_lowercase() };
            format!("{}{space}{meridiem} - ", ts.format("%-d/%-m/%y, %-I:%M"))
        }
        FormatSpec::Android24 => format!("{} - ", ts.format("%-d/%-m/%y, %-H:%M")),
        FormatSpec::Ios12 => format!(
            "[{}{space}{}] ",
            ts.format("%-d/%-m/%y, %-I:%M:%S"),
            ts.format("%p")
        ),
        FormatSpec::Ios24 => {
            let year = if index % 2 == 0 { "%Y" } else { "%y" };
            format!("[{}] ", ts.format(&format!("%d/%m/{year}, %H:%M:%S")))
        }
    }
}

fn generate_message(rng: &mut impl Rng, index: usize) -> String {
    match index % 16 {
        0..=5 => format!("Normal message #{index} with some text"),
        6 => "<Media omitted>".to_string(),
        7 => format!("check this {} #{index}", LINKS.choose(rng).copied().unwrap_or("")),
        8 => format!("Message with\ncontinuation lines\n\tand tabs #{index}"),
        9 => {
            let emojis: String = (0..rng.gen_range(1..20))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("Emoji spam: {emojis} #{index}")
        }
        10 => format!("Note: a colon inside the message #{index}"),
        11 => format!("Кириллица: Привет мир! #{index}"),
        12 => format!("日本語 こんにちは #{index}"),
        13 => format!("Mixed: Hello Привет 你好 🌍 #{index}"),
        14 => "   ".to_string(),
        _ => "x".repeat(rng.gen_range(1_000..10_000)),
    }
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..4) {
        0 => "This line has no timestamp or sender format\n".to_string(),
        1 => "[Invalid date format here] - : message\n".to_string(),
        2 => "-------------------------------------------\n".to_string(),
        _ => "\n".to_string(),
    }
}
