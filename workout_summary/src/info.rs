use std::fmt;

/// Ready to render summary of one finished workout.
///
/// Built once per report and consumed right away, all values are plain
/// copies of the metrics at build time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoMessage {
    /// Display name of the workout kind
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Spent kilocalories
    pub calories: f64,
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_template() {
        let message = InfoMessage {
            training_type: "Running".to_owned(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        };

        assert_eq!(
            message.to_string(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn always_three_decimals() {
        let message = InfoMessage {
            training_type: "Swimming".to_owned(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        };

        let rendered = message.to_string();

        assert!(rendered.contains("Длительность: 1.000 ч."));
        assert!(rendered.contains("Дистанция: 0.994 км"));
        assert!(rendered.contains("Потрачено ккал: 336.000."));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_for_json_output() {
        let message = InfoMessage {
            training_type: "Running".to_owned(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        };

        let json = serde_json::to_value(&message).expect("serde serialization can't fail");

        assert_eq!(json["training_type"], "Running");
        assert_eq!(json["calories"], 699.75);
    }
}
