use chrono::NaiveDateTime;
use serde::Serialize;
use crate::manager_owm::models::{City, ForecastEntry, ForecastResponse};

/// 5 days at 8 samples per day
pub const DISPLAY_WINDOW: usize = 40;

const KELVIN_OFFSET: f64 = 273.15;
const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ICON_BASE_URL: &str = "http://openweathermap.org/img/wn";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time: String,
    pub temperature: f64,
}

/// One carousel card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayItem {
    pub time: String,
    pub temperature: f64,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CurrentConditions {
    NoData,
    Available {
        city: String,
        country: String,
        weekday: String,
        date: String,
        temperature: f64,
        wind_speed: f64,
        humidity: u8,
        description: Option<String>,
        icon_url: Option<String>,
    },
}

/// Everything a renderer needs for one forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub city: City,
    pub current: CurrentConditions,
    pub items: Vec<DisplayItem>,
    pub chart: Vec<ChartPoint>,
}

/// Returns the first DISPLAY_WINDOW entries in their original order, or all of them if there
/// are fewer.
///
/// # Arguments
///
/// * 'response' - the forecast to take the window from
pub fn select_window(response: &ForecastResponse) -> Vec<ForecastEntry> {
    response.list.iter().take(DISPLAY_WINDOW).cloned().collect()
}

/// Maps each entry to a (timestamp label, Celsius) point, one to one and in order.
///
/// # Arguments
///
/// * 'window' - ordered forecast entries
pub fn to_chart_series(window: &[ForecastEntry]) -> Vec<ChartPoint> {
    window
        .iter()
        .map(|e| ChartPoint {
            time: e.dt_txt.clone(),
            temperature: kelvin_to_celsius(e.main.temp),
        })
        .collect()
}

/// Maps each entry to a carousel card
///
/// # Arguments
///
/// * 'window' - ordered forecast entries
pub fn to_display_items(window: &[ForecastEntry]) -> Vec<DisplayItem> {
    window
        .iter()
        .map(|e| {
            let weather = e.weather.first();
            DisplayItem {
                time: e.dt_txt.clone(),
                temperature: kelvin_to_celsius(e.main.temp),
                description: weather.map(|w| w.description.clone()),
                icon_url: weather.map(|w| icon_url(&w.icon)),
            }
        })
        .collect()
}

/// Describes the conditions of the first interval in the window, or NoData for an empty window.
///
/// # Arguments
///
/// * 'response' - the forecast, for the city descriptor
/// * 'window' - the display window
pub fn describe_current(response: &ForecastResponse, window: &[ForecastEntry]) -> CurrentConditions {
    let Some(first) = window.first() else {
        return CurrentConditions::NoData;
    };

    let (weekday, date) = match NaiveDateTime::parse_from_str(&first.dt_txt, DT_TXT_FORMAT) {
        Ok(dt) => (dt.format("%A").to_string(), dt.format("%A, %-d %B %Y").to_string()),
        Err(_) => (String::new(), first.dt_txt.clone()),
    };
    let weather = first.weather.first();

    CurrentConditions::Available {
        city: response.city.name.clone(),
        country: response.city.country.clone(),
        weekday,
        date,
        temperature: kelvin_to_celsius(first.main.temp),
        wind_speed: first.wind.speed,
        humidity: first.main.humidity,
        description: weather.map(|w| w.description.clone()),
        icon_url: weather.map(|w| icon_url(&w.icon)),
    }
}

/// Bundles window, cards, chart and current conditions for a forecast
///
/// # Arguments
///
/// * 'response' - the forecast to present
pub fn present(response: &ForecastResponse) -> Presentation {
    let window = select_window(response);

    Presentation {
        city: response.city.clone(),
        current: describe_current(response, &window),
        items: to_display_items(&window),
        chart: to_chart_series(&window),
    }
}

/// Converts kelvin to Celsius rounded to 2 decimals, ties away from zero.
///
/// # Arguments
///
/// * 'kelvin' - temperature in kelvin
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    ((kelvin - KELVIN_OFFSET) * 100.0).round() / 100.0
}

fn icon_url(icon: &str) -> String {
    format!("{}/{}.png", ICON_BASE_URL, icon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager_owm::models::{Main, Weather, Wind};

    fn entry(dt_txt: &str, temp: f64) -> ForecastEntry {
        ForecastEntry {
            dt_txt: dt_txt.to_string(),
            main: Main { temp, humidity: 64 },
            weather: vec![Weather { description: "light rain".to_string(), icon: "10d".to_string() }],
            wind: Wind { speed: 4.2 },
        }
    }

    fn response(n: usize) -> ForecastResponse {
        ForecastResponse {
            city: City { name: "Delhi".to_string(), country: "IN".to_string() },
            list: (0..n)
                .map(|i| entry(&format!("2024-01-{:02} {:02}:00:00", 15 + i / 8, (i % 8) * 3), 280.0 + i as f64))
                .collect(),
        }
    }

    #[test]
    fn test_select_window_caps_at_forty() {
        let r = response(45);
        let window = select_window(&r);

        assert_eq!(window.len(), 40);
        assert_eq!(window[..], r.list[..40]);
    }

    #[test]
    fn test_select_window_short_and_empty() {
        assert_eq!(select_window(&response(3)).len(), 3);
        assert!(select_window(&response(0)).is_empty());
        assert_eq!(select_window(&response(40)).len(), 40);
    }

    #[test]
    fn test_kelvin_to_celsius() {
        assert_eq!(kelvin_to_celsius(300.0), 26.85);
        assert_eq!(kelvin_to_celsius(273.15), 0.0);
        assert_eq!(kelvin_to_celsius(263.15), -10.0);
    }

    #[test]
    fn test_kelvin_to_celsius_rounds_half_away_from_zero() {
        assert_eq!(kelvin_to_celsius(301.005), 27.86);
    }

    #[test]
    fn test_chart_series_is_one_to_one() {
        let r = response(45);
        let window = select_window(&r);
        let chart = to_chart_series(&window);

        assert_eq!(chart.len(), 40);
        for (point, e) in chart.iter().zip(window.iter()) {
            assert_eq!(point.time, e.dt_txt);
        }
        assert_eq!(chart[0], ChartPoint { time: "2024-01-15 00:00:00".to_string(), temperature: 6.85 });
    }

    #[test]
    fn test_chart_series_is_repeatable() {
        let r = response(12);

        assert_eq!(to_chart_series(&select_window(&r)), to_chart_series(&select_window(&r)));
    }

    #[test]
    fn test_display_items() {
        let mut r = response(2);
        r.list[1].weather.clear();
        let items = to_display_items(&r.list);

        assert_eq!(items[0].description.as_deref(), Some("light rain"));
        assert_eq!(items[0].icon_url.as_deref(), Some("http://openweathermap.org/img/wn/10d.png"));
        assert_eq!(items[0].temperature, 6.85);
        assert_eq!(items[1].description, None);
        assert_eq!(items[1].icon_url, None);
    }

    #[test]
    fn test_describe_current() {
        let r = response(5);
        let current = describe_current(&r, &select_window(&r));

        assert_eq!(current, CurrentConditions::Available {
            city: "Delhi".to_string(),
            country: "IN".to_string(),
            weekday: "Monday".to_string(),
            date: "Monday, 15 January 2024".to_string(),
            temperature: 6.85,
            wind_speed: 4.2,
            humidity: 64,
            description: Some("light rain".to_string()),
            icon_url: Some("http://openweathermap.org/img/wn/10d.png".to_string()),
        });
    }

    #[test]
    fn test_describe_current_empty_window_is_no_data() {
        let r = response(0);

        assert_eq!(describe_current(&r, &select_window(&r)), CurrentConditions::NoData);
    }

    #[test]
    fn test_describe_current_odd_timestamp_keeps_raw_text() {
        let mut r = response(1);
        r.list[0].dt_txt = "tomorrow-ish".to_string();

        match describe_current(&r, &r.list) {
            CurrentConditions::Available { weekday, date, .. } => {
                assert_eq!(weekday, "");
                assert_eq!(date, "tomorrow-ish");
            }
            CurrentConditions::NoData => panic!("expected conditions"),
        }
    }

    #[test]
    fn test_present_end_to_end() {
        let p = present(&response(45));
        assert_eq!(p.items.len(), 40);
        assert_eq!(p.chart.len(), 40);

        let p = present(&response(3));
        assert_eq!(p.items.len(), 3);
        assert_eq!(p.chart.len(), 3);

        let p = present(&response(0));
        assert!(p.items.is_empty());
        assert!(p.chart.is_empty());
        assert_eq!(p.current, CurrentConditions::NoData);
    }
}
