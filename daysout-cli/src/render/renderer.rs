use super::theme::OneDark;
use daysout_core::render::{
    BANNER, column_headers, markdown_table, plain_table, table_rows, totals_lines,
};
use daysout_core::{Report, TravelLog, TravelTotals};
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub home: Option<String>,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::report_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: daysout_core::config::DEFAULT_DATE_FORMAT.to_string(),
                    home: None,
                    use_color: true,
                },
            },
        }
    }

    pub fn print_report(&self, report: &Report) {
        self.print_section("ALL DATES:", &report.all_dates);
        self.print_section("PAST YEAR DATES:", &report.past_year);
    }

    fn print_section(&self, title: &str, logs: &[TravelLog]) {
        let home = self.opts.home.as_deref();
        let headers = column_headers(home);
        let rows = table_rows(logs, &self.opts.date_format);
        let totals = totals_lines(&TravelTotals::of(logs), home);

        if self.opts.use_color {
            println!("{}", title.with(OneDark::RED).bold());
            println!("{}", BANNER.with(OneDark::COMMENT));
            println!();
            self.skin.print_text(&markdown_table(&headers, &rows));
            println!();
            print!("{}", totals.as_str().with(OneDark::YELLOW));
            println!();
            println!("{}", BANNER.with(OneDark::COMMENT));
        } else {
            println!("{title}");
            println!("{BANNER}");
            println!();
            print!("{}", plain_table(&headers, &rows));
            println!();
            print!("{totals}");
            println!();
            println!("{BANNER}");
        }
        println!();
    }
}
