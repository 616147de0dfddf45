use anyhow::Result;
use colored::*;
use std::io::{self, Write};

use crate::farm::default_animals;
use crate::sound::{SoundMaker, SEPARATOR};
use crate::types::{Announcement, Farm};

pub const HEADER: &str = "All farm animals:";

/// Write whatever the entity says, followed by a newline
pub fn announce_to<W, S>(out: &mut W, entity: &S) -> io::Result<()>
where
    W: Write + ?Sized,
    S: SoundMaker + ?Sized,
{
    writeln!(out, "{}", entity.make_sound())
}

/// Print whatever the entity says to stdout
pub fn announce<S: SoundMaker + ?Sized>(entity: &S) -> io::Result<()> {
    announce_to(&mut io::stdout().lock(), entity)
}

// Same line as announce_to, with the name highlighted
pub fn highlight_to<W, S>(out: &mut W, entity: &S) -> io::Result<()>
where
    W: Write + ?Sized,
    S: SoundMaker + ?Sized,
{
    let sound = entity.make_sound();
    match sound.rsplit_once(SEPARATOR) {
        Some((name, exclamation)) => {
            writeln!(out, "{}{}{}", name.green().bold(), SEPARATOR, exclamation)
        }
        None => writeln!(out, "{}", sound),
    }
}

fn announce_in_style<S: SoundMaker + ?Sized>(entity: &S, color: bool) -> io::Result<()> {
    if color {
        highlight_to(&mut io::stdout().lock(), entity)
    } else {
        announce(entity)
    }
}

// Blank line, header, then the whole farm in insertion order
pub fn write_roll_call<W: Write + ?Sized>(out: &mut W, animals: &[Box<dyn SoundMaker>], color: bool) -> io::Result<()> {
    writeln!(out)?;
    if color {
        writeln!(out, "{}", HEADER.blue().bold())?;
    } else {
        writeln!(out, "{}", HEADER)?;
    }

    for animal in animals {
        if color {
            highlight_to(out, animal.as_ref())?;
        } else {
            announce_to(out, animal.as_ref())?;
        }
    }

    Ok(())
}

fn print_roll_call(animals: &[Box<dyn SoundMaker>], color: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    write_roll_call(&mut out, animals, color)?;
    out.flush()?;
    Ok(())
}

// Output the built-in farm: each animal by its concrete type, then the roll call
pub fn output_default_text(color: bool) -> Result<()> {
    let (dog, cat, cow) = default_animals();

    announce_in_style(&dog, color)?;
    announce_in_style(&cat, color)?;
    announce_in_style(&cow, color)?;

    let animals: Vec<Box<dyn SoundMaker>> = vec![Box::new(dog), Box::new(cat), Box::new(cow)];
    print_roll_call(&animals, color)
}

// Output a loaded farm as text: each animal on its own, then the roll call
pub fn output_text(farm: Farm, color: bool) -> Result<()> {
    let animals: Vec<Box<dyn SoundMaker>> = farm
        .into_iter()
        .map(|spec| spec.into_sound_maker())
        .collect();

    for animal in &animals {
        announce_in_style(animal, color)?;
    }

    print_roll_call(&animals, color)
}

// Write the farm's announcements as pretty JSON
pub fn write_json<W: Write + ?Sized>(out: &mut W, farm: &Farm) -> Result<()> {
    let announcements: Vec<Announcement> = farm.iter().map(Announcement::from).collect();
    let json = serde_json::to_string_pretty(&announcements)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

// Output the farm as JSON
pub fn output_json(farm: &Farm) -> Result<()> {
    let mut out = io::stdout().lock();
    write_json(&mut out, farm)?;
    out.flush()?;
    Ok(())
}
