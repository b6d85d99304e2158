use crate::presenter::{CardPresenter, CompactPresenter, JsonPresenter, Presenter};
use crate::settings::Settings;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Namaz vakitleri ve bir sonraki vakte kalan süre")]
pub struct Cli {
    /// City to query. Saved as the default for later runs.
    #[arg(short, long)]
    pub city: Option<String>,

    /// Country to narrow the city lookup (may be left empty)
    #[arg(long)]
    pub country: Option<String>,

    /// Aladhan calculation method (13 = Diyanet)
    #[arg(short, long)]
    pub method: Option<u8>,

    /// Find the city from the public IP address
    #[arg(short, long)]
    pub locate: bool,

    /// Turn prayer time notifications on or off. Saved for later runs.
    #[arg(short, long, value_enum)]
    pub notifications: Option<Toggle>,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = Style::Cards)]
    pub style: Style,

    /// Fetch once, print a single frame and exit
    #[arg(long)]
    pub once: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Clock, countdown and all six prayers
    Cards,
    /// One line with the time left to the next prayer
    Compact,
    /// JSON object per frame
    Json,
}

impl Style {
    pub fn presenter(self) -> Box<dyn Presenter> {
        match self {
            Style::Cards => Box::new(CardPresenter),
            Style::Compact => Box::new(CompactPresenter),
            Style::Json => Box::new(JsonPresenter),
        }
    }
}

impl Cli {
    /// Copy command line overrides into `settings`. Returns true if anything
    /// changed and the settings should be saved.
    pub fn apply_to(&self, settings: &mut Settings) -> bool {
        let before = settings.clone();

        if let Some(city) = &self.city {
            settings.city = city.trim().to_string();
        }
        if let Some(country) = &self.country {
            settings.country = country.trim().to_string();
        }
        if let Some(method) = self.method {
            settings.method = method;
        }
        if let Some(toggle) = self.notifications {
            settings.notifications = toggle == Toggle::On;
        }

        *settings != before
    }
}
