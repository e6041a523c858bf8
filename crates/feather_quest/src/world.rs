//! World conditions: time of day, weather and season, plus the visibility and
//! difficulty factors derived from them.
//!
//! Derived factors are computed on read from the current fields, so a
//! [`WorldContext`] can be mutated freely without leaving stale values behind.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::birds::PlumageType;

/// Phase of the in-game day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeOfDay {
    Dawn,
    #[default]
    Morning,
    Midday,
    Afternoon,
    Dusk,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 6] = [
        TimeOfDay::Dawn,
        TimeOfDay::Morning,
        TimeOfDay::Midday,
        TimeOfDay::Afternoon,
        TimeOfDay::Dusk,
        TimeOfDay::Night,
    ];

    /// Base visibility before weather is applied.
    pub fn base_visibility(self) -> f32 {
        match self {
            TimeOfDay::Dawn => 0.6,
            TimeOfDay::Morning => 1.0,
            TimeOfDay::Midday => 1.0,
            TimeOfDay::Afternoon => 0.9,
            TimeOfDay::Dusk => 0.5,
            TimeOfDay::Night => 0.2,
        }
    }
}

/// Current weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Weather {
    #[default]
    Clear,
    PartlyCloudy,
    Overcast,
    LightRain,
    HeavyRain,
    PostRain,
    Fog,
    Snow,
    Windy,
}

impl Weather {
    pub const ALL: [Weather; 9] = [
        Weather::Clear,
        Weather::PartlyCloudy,
        Weather::Overcast,
        Weather::LightRain,
        Weather::HeavyRain,
        Weather::PostRain,
        Weather::Fog,
        Weather::Snow,
        Weather::Windy,
    ];

    /// Multiplier applied to the time-of-day visibility.
    pub fn visibility_multiplier(self) -> f32 {
        match self {
            Weather::Fog => 0.3,
            Weather::HeavyRain => 0.5,
            Weather::LightRain => 0.7,
            Weather::Snow => 0.6,
            Weather::Overcast => 0.85,
            Weather::PartlyCloudy | Weather::Clear | Weather::PostRain | Weather::Windy => 1.0,
        }
    }
}

/// Season of the year. Descriptive only: it selects plumage, it does not change
/// visibility or spawn rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Plumage types commonly seen in this season, most typical first.
    pub fn typical_plumage(self) -> &'static [PlumageType] {
        match self {
            Season::Spring => &[PlumageType::Breeding],
            Season::Summer => &[PlumageType::Breeding, PlumageType::Juvenile],
            Season::Fall => &[
                PlumageType::Molting,
                PlumageType::NonBreeding,
                PlumageType::Juvenile,
            ],
            Season::Winter => &[PlumageType::NonBreeding],
        }
    }
}

impl_case_insensitive_parse!(TimeOfDay, "time of day");
impl_case_insensitive_parse!(Weather, "weather");
impl_case_insensitive_parse!(Season, "season");

/// Visibility and difficulty derived from a [`WorldContext`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentFactors {
    /// Normalized visibility in `[0, 1]`.
    pub visibility: f32,
    /// Risk/reward multiplier, never below `1.0`.
    pub difficulty_multiplier: f32,
}

impl EnvironmentFactors {
    pub fn from_conditions(time_of_day: TimeOfDay, weather: Weather) -> Self {
        let visibility = time_of_day.base_visibility() * weather.visibility_multiplier();
        Self {
            visibility,
            difficulty_multiplier: (2.0 - visibility).max(1.0),
        }
    }
}

/// Environmental state of the game world.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldContext {
    pub time_of_day: TimeOfDay,
    pub weather: Weather,
    pub season: Season,
    /// In-game calendar timestamp, when the caller tracks one.
    pub current_date: Option<NaiveDateTime>,
}

impl WorldContext {
    pub fn new(time_of_day: TimeOfDay, weather: Weather, season: Season) -> Self {
        Self {
            time_of_day,
            weather,
            season,
            current_date: None,
        }
    }

    /// Sets the calendar timestamp.
    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.current_date = Some(date);
        self
    }

    /// Computes visibility and difficulty for the current time of day and weather.
    pub fn recalculate_factors(&self) -> EnvironmentFactors {
        EnvironmentFactors::from_conditions(self.time_of_day, self.weather)
    }

    pub fn visibility(&self) -> f32 {
        self.recalculate_factors().visibility
    }

    pub fn difficulty_multiplier(&self) -> f32 {
        self.recalculate_factors().difficulty_multiplier
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::Error;

    const EPS: f32 = 1e-5;

    #[test]
    fn clear_morning_is_fully_visible() {
        let ctx = WorldContext::new(TimeOfDay::Morning, Weather::Clear, Season::Spring);
        let factors = ctx.recalculate_factors();
        assert!((factors.visibility - 1.0).abs() < EPS);
        assert!((factors.difficulty_multiplier - 1.0).abs() < EPS);
    }

    #[test]
    fn foggy_night_is_hardest() {
        let ctx = WorldContext::new(TimeOfDay::Night, Weather::Fog, Season::Winter);
        assert!((ctx.visibility() - 0.06).abs() < EPS);
        assert!(ctx.difficulty_multiplier() > 1.9);
    }

    #[test]
    fn overcast_dusk_combines_multiplicatively() {
        let ctx = WorldContext::new(TimeOfDay::Dusk, Weather::Overcast, Season::Fall);
        assert!((ctx.visibility() - 0.425).abs() < EPS);
        assert!((ctx.difficulty_multiplier() - 1.575).abs() < EPS);
    }

    #[test]
    fn derived_factors_follow_mutation() {
        let mut ctx = WorldContext::new(TimeOfDay::Morning, Weather::Clear, Season::Summer);
        assert!((ctx.visibility() - 1.0).abs() < EPS);
        ctx.weather = Weather::HeavyRain;
        assert!((ctx.visibility() - 0.5).abs() < EPS);
        ctx.time_of_day = TimeOfDay::Dawn;
        assert!((ctx.visibility() - 0.3).abs() < EPS);
    }

    #[test]
    fn factors_stay_in_range_for_every_combination() {
        for time in TimeOfDay::ALL {
            for weather in Weather::ALL {
                let f = EnvironmentFactors::from_conditions(time, weather);
                assert!((0.0..=1.0).contains(&f.visibility), "{time} {weather}");
                assert!(f.difficulty_multiplier >= 1.0);
            }
        }
    }

    #[test]
    fn season_does_not_change_factors() {
        let base = WorldContext::new(TimeOfDay::Afternoon, Weather::Snow, Season::Spring);
        for season in Season::ALL {
            let ctx = WorldContext { season, ..base.clone() };
            assert_eq!(ctx.recalculate_factors(), base.recalculate_factors());
        }
    }

    #[test]
    fn parses_enums_case_insensitively() {
        assert_eq!("dawn".parse::<TimeOfDay>().unwrap(), TimeOfDay::Dawn);
        assert_eq!("POSTRAIN".parse::<Weather>().unwrap(), Weather::PostRain);
        assert_eq!(" Winter ".parse::<Season>().unwrap(), Season::Winter);
        assert!(matches!(
            "monsoon".parse::<Weather>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn calendar_date_is_plain_state() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 12)
            .and_then(|d| d.and_hms_opt(6, 30, 0))
            .expect("valid date");
        let ctx = WorldContext::new(TimeOfDay::Dawn, Weather::Clear, Season::Spring).with_date(date);
        assert_eq!(ctx.current_date, Some(date));
        assert!((ctx.visibility() - 0.6).abs() < EPS);
    }
}
