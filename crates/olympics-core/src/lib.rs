//! Preprocessing and aggregation for Olympic Games results.
//!
//! [`preprocess`] builds the [`AnalysisTable`](olympics_model::AnalysisTable)
//! once; every view below is a pure function over a shared reference to it
//! and returns a freshly allocated derived table.

pub mod athletes;
pub mod country;
pub mod dedupe;
pub mod demographics;
pub mod lists;
pub mod preprocess;
pub mod tally;
pub mod timeline;

pub use athletes::{
    TOP_ATHLETES, TOP_COUNTRY_ATHLETES, most_successful, most_successful_countrywise,
};
pub use country::{country_event_heatmap, yearwise_medal_tally};
pub use dedupe::{TeamMedalKey, dedupe_athletes, dedupe_by_key, dedupe_exact_rows, dedupe_team_medals};
pub use demographics::{FAMOUS_SPORTS, age_by_sport, age_distribution, men_vs_women, weight_v_height};
pub use lists::{country_list, country_year_list, overview_stats, sport_list};
pub use preprocess::preprocess;
pub use tally::fetch_medal_tally;
pub use timeline::data_over_time;
