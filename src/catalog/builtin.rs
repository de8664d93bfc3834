use crate::catalog::model::{Catalog, Show, SlideSpec};
use crate::theme::registry::ThemeId;

pub(super) const BACKGROUNDS: [&str; 6] = [
    "backgrounds/random newspaper text backgdrop (1).jpg",
    "backgrounds/random newspaper text backgdrop.jpg",
    "backgrounds/random newspaper text cutouts backgdrop (1).jpg",
    "backgrounds/random newspaper text cutouts backgdrop (2).jpg",
    "backgrounds/random newspaper text cutouts backgdrop (3).jpg",
    "backgrounds/random newspaper text cutouts backgdrop (4).jpg",
];

// (id, title, theme, [(image file, concept number)])
type ShowRow = (u32, &'static str, ThemeId, &'static [(&'static str, u32)]);

const SHOWS: [ShowRow; 5] = [
    (
        1,
        "COOL PROMPT IDEAS - PART 1",
        ThemeId::MightyDark,
        &[
            ("batch-image-11 (1).png", 11),
            ("batch-image-12 (2).png", 12),
            ("batch-image-13 (1).png", 13),
            ("batch-image-16.png", 16),
        ],
    ),
    (
        2,
        "COOL PROMPT IDEAS - PART 2",
        ThemeId::MelodicaPurple,
        &[
            ("batch-image-17.png", 17),
            ("batch-image-26.png", 26),
            ("batch-image-27.png", 27),
            ("batch-image-28.png", 28),
        ],
    ),
    (
        3,
        "COOL PROMPT IDEAS - PART 3",
        ThemeId::MelodicaGradient,
        &[
            ("batch-image-29.png", 29),
            ("batch-image-30.png", 30),
            ("batch-image-32.png", 32),
            ("batch-image-34.png", 34),
        ],
    ),
    (
        4,
        "COOL PROMPT IDEAS - PART 4",
        ThemeId::MightyDark,
        &[
            ("batch-image-41.png", 41),
            ("batch-image-43.png", 43),
            ("batch-image-44.png", 44),
            ("batch-image-49.png", 49),
        ],
    ),
    (
        5,
        "COOL PROMPT IDEAS - PART 5 (BONUS)",
        ThemeId::MelodicaPurple,
        &[("batch-image-5 (5).png", 5), ("batch-image-50.png", 50)],
    ),
];

impl Catalog {
    /// The five prompt-idea shows shipped with the crate.
    pub fn builtin() -> Self {
        let shows = SHOWS
            .iter()
            .map(|&(id, title, theme, images)| Show {
                id,
                title: title.to_owned(),
                theme,
                slides: images
                    .iter()
                    .map(|&(file, n)| SlideSpec {
                        image: format!("batch-images/{file}"),
                        caption: format!("AI Fashion Concept #{n}"),
                    })
                    .collect(),
            })
            .collect();

        Self {
            shows,
            backgrounds: BACKGROUNDS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
