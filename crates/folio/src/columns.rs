//! Columns of the artworks table.

use crate::record::Artwork;

/// A column shown for each artwork row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtworkColumn {
    Title,
    PlaceOfOrigin,
    Artist,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl ArtworkColumn {
    /// Every column, in display order.
    pub const ALL: [ArtworkColumn; 6] = [
        ArtworkColumn::Title,
        ArtworkColumn::PlaceOfOrigin,
        ArtworkColumn::Artist,
        ArtworkColumn::Inscriptions,
        ArtworkColumn::DateStart,
        ArtworkColumn::DateEnd,
    ];

    /// Header label.
    pub fn header(self) -> &'static str {
        match self {
            ArtworkColumn::Title => "TITLE",
            ArtworkColumn::PlaceOfOrigin => "PLACE OF ORIGIN",
            ArtworkColumn::Artist => "ARTIST",
            ArtworkColumn::Inscriptions => "INSCRIPTIONS",
            ArtworkColumn::DateStart => "START",
            ArtworkColumn::DateEnd => "END",
        }
    }

    /// Share of the table width, in percent.
    pub fn width_percent(self) -> u8 {
        match self {
            ArtworkColumn::Title => 25,
            ArtworkColumn::PlaceOfOrigin => 15,
            ArtworkColumn::Artist | ArtworkColumn::Inscriptions => 20,
            ArtworkColumn::DateStart | ArtworkColumn::DateEnd => 10,
        }
    }

    /// Cell text for `artwork`. Missing values render as an empty cell.
    pub fn cell_text(self, artwork: &Artwork) -> String {
        let text = match self {
            ArtworkColumn::Title => artwork.title.clone(),
            ArtworkColumn::PlaceOfOrigin => artwork.place_of_origin.clone(),
            ArtworkColumn::Artist => artwork.artist_display.clone(),
            ArtworkColumn::Inscriptions => artwork.inscriptions.clone(),
            ArtworkColumn::DateStart => artwork.date_start.map(|year| year.to_string()),
            ArtworkColumn::DateEnd => artwork.date_end.map(|year| year.to_string()),
        };
        text.unwrap_or_default()
    }
}
