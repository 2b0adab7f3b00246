//! Store records for the three media catalogs
//!
//! Each record type is ordered by its own key fields. The quantity on hand is not part of a
//! record; the catalog keeps it as the record's occurrence count.
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// The catalog an [Item] belongs to
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Category {
    /// Rock CDs, code `R`
    Rock,
    /// Classical CDs, code `C`
    Classical,
    /// DVDs, code `D`
    Dvd,
}

impl Category {
    /// Every category, in the order the inventory report lists them
    pub const ALL: [Category; 3] = [Category::Rock, Category::Classical, Category::Dvd];

    /// The single letter used for this category in data files
    pub fn code(self) -> char {
        match self {
            Category::Rock => 'R',
            Category::Classical => 'C',
            Category::Dvd => 'D',
        }
    }

    /// Look up a category by its file code
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'R' => Some(Category::Rock),
            'C' => Some(Category::Classical),
            'D' => Some(Category::Dvd),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Category::Rock => write!(out, "Rock CDs"),
            Category::Classical => write!(out, "Classical CDs"),
            Category::Dvd => write!(out, "DVDs"),
        }
    }
}

/// A rock CD, ordered by artist, year, then title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rock {
    artist: String,
    title: String,
    year: u16,
}

impl Rock {
    /// Create a new rock CD record
    pub fn new(artist: impl Into<String>, title: impl Into<String>, year: u16) -> Self {
        Rock {
            artist: artist.into(),
            title: title.into(),
            year,
        }
    }

    /// The performing artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// The album title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The release year
    pub fn year(&self) -> u16 {
        self.year
    }
}

impl PartialOrd for Rock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rock {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.artist, self.year, &self.title).cmp(&(&other.artist, other.year, &other.title))
    }
}

impl Display for Rock {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(out, "Rock CD: {}, {}, {}", self.artist, self.title, self.year)
    }
}

/// A classical CD, ordered by composer, artist, year, then title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classical {
    composer: String,
    artist: String,
    title: String,
    year: u16,
}

impl Classical {
    /// Create a new classical CD record
    pub fn new(
        composer: impl Into<String>,
        artist: impl Into<String>,
        title: impl Into<String>,
        year: u16,
    ) -> Self {
        Classical {
            composer: composer.into(),
            artist: artist.into(),
            title: title.into(),
            year,
        }
    }

    /// The composer of the work
    pub fn composer(&self) -> &str {
        &self.composer
    }

    /// The performing artist or ensemble
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// The album title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The release year
    pub fn year(&self) -> u16 {
        self.year
    }
}

impl PartialOrd for Classical {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Classical {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.composer, &self.artist, self.year, &self.title).cmp(&(
            &other.composer,
            &other.artist,
            other.year,
            &other.title,
        ))
    }
}

impl Display for Classical {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            out,
            "Classical CD: {}, {}, {}, {}",
            self.artist, self.title, self.year, self.composer
        )
    }
}

/// A DVD, ordered by title, year, then director
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dvd {
    director: String,
    title: String,
    year: u16,
}

impl Dvd {
    /// Create a new DVD record
    pub fn new(director: impl Into<String>, title: impl Into<String>, year: u16) -> Self {
        Dvd {
            director: director.into(),
            title: title.into(),
            year,
        }
    }

    /// The director
    pub fn director(&self) -> &str {
        &self.director
    }

    /// The film title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The release year
    pub fn year(&self) -> u16 {
        self.year
    }
}

impl PartialOrd for Dvd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dvd {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.title, self.year, &self.director).cmp(&(
            &other.title,
            other.year,
            &other.director,
        ))
    }
}

impl Display for Dvd {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(out, "DVD: {}, {}, {}", self.director, self.title, self.year)
    }
}

/// Any store record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// A rock CD
    Rock(Rock),
    /// A classical CD
    Classical(Classical),
    /// A DVD
    Dvd(Dvd),
}

impl Item {
    /// The catalog this item is stocked in
    pub fn category(&self) -> Category {
        match self {
            Item::Rock(_) => Category::Rock,
            Item::Classical(_) => Category::Classical,
            Item::Dvd(_) => Category::Dvd,
        }
    }
}

impl From<Rock> for Item {
    fn from(rock: Rock) -> Self {
        Item::Rock(rock)
    }
}

impl From<Classical> for Item {
    fn from(classical: Classical) -> Self {
        Item::Classical(classical)
    }
}

impl From<Dvd> for Item {
    fn from(dvd: Dvd) -> Self {
        Item::Dvd(dvd)
    }
}

impl Display for Item {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Item::Rock(rock) => write!(out, "{}", rock),
            Item::Classical(classical) => write!(out, "{}", classical),
            Item::Dvd(dvd) => write!(out, "{}", dvd),
        }
    }
}
