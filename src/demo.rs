//! Built-in sample catalog used by the `media-library` binary.

use crate::error::Result;
use crate::library::MediaLibrary;
use crate::media::{ContentRating, ItemId, MediaInfo, Movie, Podcast, ShowStatus, Song, TvShow};

/// Build a library populated with a small mixed catalog
pub fn sample_library(name: &str) -> Result<MediaLibrary> {
    let mut library = MediaLibrary::new(name);

    let info = MediaInfo::new("Arrival", 2016, 116, ["sci-fi", "drama"])?
        .with_rating(ContentRating::Pg13)
        .with_description("A linguist works with the military to communicate with alien visitors.");
    let arrival = library.add(
        Movie::new(info, "Denis Villeneuve", ["Amy Adams", "Jeremy Renner"])?
            .with_finances(Some(47_000_000.0), Some(203_400_000.0))?,
    )?;

    let info = MediaInfo::new("Spirited Away", 2001, 125, ["animation", "fantasy"])?
        .with_rating(ContentRating::Pg)
        .with_description("A girl wanders into a world of spirits.");
    let spirited_away = library.add(Movie::new(info, "Hayao Miyazaki", ["Rumi Hiiragi"])?)?;

    let info = MediaInfo::new("The Wire", 2002, 59, ["crime", "drama"])?
        .with_rating(ContentRating::R)
        .with_description("Baltimore drug scene, seen through dealers and police.");
    let the_wire = library.add(TvShow::new(info, 5, 60, ShowStatus::Completed)?)?;

    let info = MediaInfo::new("So What", 1959, 9, ["jazz"])?
        .with_description("Opening track of a modal jazz landmark.");
    let so_what = library.add(Song::new(info, "Miles Davis", "Kind of Blue", 1, false)?)?;

    let info = MediaInfo::new("Take Five", 1959, 5, ["jazz"])?;
    library.add(Song::new(info, "The Dave Brubeck Quartet", "Time Out", 3, false)?)?;

    let info = MediaInfo::new("Paranoid Android", 1997, 6, ["rock", "alternative"])?;
    library.add(Song::new(info, "Radiohead", "OK Computer", 2, false)?)?;

    let info = MediaInfo::new("Wrath of the Khans", 2012, 280, ["history"])?
        .with_description("The Mongol conquests, told in long form.");
    library.add(Podcast::new(info, "Dan Carlin", 43, 1, false)?)?;

    let info = MediaInfo::new("The Alternative Facts", 2017, 36, ["news", "politics"])?
        .with_rating(ContentRating::Pg13);
    library.add(Podcast::new(info, "Michael Barbaro", 12, 1, true)?)?;

    let history: [(&ItemId, u32, &[f64]); 4] = [
        (&arrival, 3, &[4.5, 5.0]),
        (&spirited_away, 5, &[5.0]),
        (&the_wire, 2, &[4.0, 5.0, 4.5]),
        (&so_what, 7, &[4.0]),
    ];
    for (id, views, ratings) in history {
        for _ in 0..views {
            library.record_view(id)?;
        }
        for rating in ratings {
            library.rate(id, *rating)?;
        }
    }

    Ok(library)
}
