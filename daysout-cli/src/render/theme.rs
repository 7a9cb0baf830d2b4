use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

pub struct OneDark;

impl OneDark {
    pub const FG: Color = Color::Rgb {
        r: 0xAB,
        g: 0xB2,
        b: 0xBF,
    }; // #ABB2BF
    pub const RED: Color = Color::Rgb {
        r: 0xE0,
        g: 0x6C,
        b: 0x75,
    }; // #E06C75
    pub const YELLOW: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC0,
        b: 0x7B,
    }; // #E5C07B
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    }; // #98C379
    pub const PURPLE: Color = Color::Rgb {
        r: 0xC6,
        g: 0x78,
        b: 0xDD,
    }; // #C678DD
    pub const COMMENT: Color = Color::Rgb {
        r: 0x5C,
        g: 0x63,
        b: 0x70,
    }; // #5C6370

    /// Skin for the report: headers in yellow, table borders in purple.
    pub fn report_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Self::FG);
        skin.bold.set_fg(Self::YELLOW);
        skin.bold.add_attr(Attribute::Bold);

        skin.headers[0].set_fg(Self::RED);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.table.set_fg(Self::PURPLE);
        skin.inline_code.set_fg(Self::GREEN);

        skin
    }
}
