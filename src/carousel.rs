use serde::Serialize;

/// Settings for one tier of the carousel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideSettings {
    pub slides_to_show: u8,
    pub slides_to_scroll: u8,
    pub infinite: bool,
    pub dots: bool,
    pub initial_slide: u8,
}

/// A tier that applies to viewports narrower than `breakpoint`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoint {
    pub breakpoint: u32,
    pub settings: SlideSettings,
}

/// Responsive carousel configuration, consumed as is by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarouselSettings {
    pub speed_ms: u32,
    pub draggable: bool,
    #[serde(flatten)]
    pub base: SlideSettings,
    pub responsive: [Breakpoint; 2],
}

pub const CAROUSEL_SETTINGS: CarouselSettings = CarouselSettings {
    speed_ms: 500,
    draggable: true,
    base: SlideSettings {
        slides_to_show: 3,
        slides_to_scroll: 3,
        infinite: false,
        dots: true,
        initial_slide: 0,
    },
    responsive: [
        Breakpoint {
            breakpoint: 1024,
            settings: SlideSettings {
                slides_to_show: 2,
                slides_to_scroll: 2,
                infinite: true,
                dots: true,
                initial_slide: 0,
            },
        },
        Breakpoint {
            breakpoint: 600,
            settings: SlideSettings {
                slides_to_show: 1,
                slides_to_scroll: 1,
                infinite: false,
                dots: true,
                initial_slide: 1,
            },
        },
    ],
};

impl CarouselSettings {
    /// Returns the settings in effect for the given viewport width.
    /// The narrowest breakpoint above the width wins, otherwise the base tier applies.
    ///
    /// # Arguments
    ///
    /// * 'width' - viewport width
    pub fn effective(&self, width: u32) -> SlideSettings {
        self.responsive
            .iter()
            .filter(|b| width < b.breakpoint)
            .min_by_key(|b| b.breakpoint)
            .map(|b| b.settings)
            .unwrap_or(self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tier() {
        let s = CAROUSEL_SETTINGS.effective(1280);
        assert_eq!(s.slides_to_show, 3);
        assert_eq!(s.slides_to_scroll, 3);
        assert!(!s.infinite);
        assert!(s.dots);
        assert_eq!(CAROUSEL_SETTINGS.effective(1024), s);
    }

    #[test]
    fn test_tablet_tier_loops() {
        let s = CAROUSEL_SETTINGS.effective(1023);
        assert_eq!(s.slides_to_show, 2);
        assert_eq!(s.slides_to_scroll, 2);
        assert!(s.infinite);
        assert_eq!(CAROUSEL_SETTINGS.effective(600), s);
    }

    #[test]
    fn test_phone_tier() {
        let s = CAROUSEL_SETTINGS.effective(599);
        assert_eq!(s.slides_to_show, 1);
        assert_eq!(s.slides_to_scroll, 1);
        assert!(!s.infinite);
        assert_eq!(s.initial_slide, 1);
        assert_eq!(CAROUSEL_SETTINGS.effective(0), s);
    }

    #[test]
    fn test_serializes_flat_base() {
        let json = serde_json::to_value(CAROUSEL_SETTINGS).unwrap();
        assert_eq!(json["slides_to_show"], 3);
        assert_eq!(json["speed_ms"], 500);
        assert_eq!(json["responsive"][0]["breakpoint"], 1024);
        assert_eq!(json["responsive"][1]["settings"]["initial_slide"], 1);
    }
}
