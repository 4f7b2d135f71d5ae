use serde::{Deserialize, Serialize};

/// Who is eating today, by role.
///
/// `total_people` must equal the sum of the four counts; callers keep it in
/// sync (see [`PartyConfiguration::is_valid`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyConfiguration {
    pub total_people: u32,
    pub adult_men: u32,
    pub adult_women: u32,
    pub children: u32,
    pub elderly: u32,
}

impl Default for PartyConfiguration {
    fn default() -> Self {
        Self::new(1, 1, 0, 0)
    }
}

impl PartyConfiguration {
    pub fn new(adult_men: u32, adult_women: u32, children: u32, elderly: u32) -> Self {
        Self {
            total_people: adult_men + adult_women + children + elderly,
            adult_men,
            adult_women,
            children,
            elderly,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.total_people == self.adult_men + self.adult_women + self.children + self.elderly
            && self.total_people > 0
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        self.children > 0
    }

    #[inline]
    pub fn has_elderly(&self) -> bool {
        self.elderly > 0
    }

    pub fn max_spicy_level(&self) -> u8 {
        if self.has_children() {
            1
        } else if self.has_elderly() {
            2
        } else {
            3
        }
    }

    /// Target number of main + side dishes.
    pub fn dish_count(&self) -> usize {
        match self.total_people {
            1 => 2,
            2 => 3,
            3 => 4,
            4..=5 => 5,
            6..=7 => 7,
            _ => 8,
        }
    }

    pub fn soup_count(&self) -> usize {
        if self.total_people >= 6 { 2 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_and_soup_counts() {
        let expected = [
            (1, 2, 1),
            (2, 3, 1),
            (3, 4, 1),
            (4, 5, 1),
            (5, 5, 1),
            (6, 7, 2),
            (7, 7, 2),
            (8, 8, 2),
            (100, 8, 2),
        ];
        for (people, dishes, soups) in expected {
            let config = PartyConfiguration::new(people, 0, 0, 0);
            assert_eq!(config.dish_count(), dishes, "dish count for {people}");
            assert_eq!(config.soup_count(), soups, "soup count for {people}");
        }
    }

    #[test]
    fn test_max_spicy_level() {
        assert_eq!(PartyConfiguration::new(1, 1, 0, 0).max_spicy_level(), 3);
        assert_eq!(PartyConfiguration::new(1, 1, 0, 1).max_spicy_level(), 2);
        assert_eq!(PartyConfiguration::new(1, 1, 1, 1).max_spicy_level(), 1);
    }

    #[test]
    fn test_is_valid() {
        assert!(PartyConfiguration::new(1, 0, 0, 0).is_valid());
        assert!(!PartyConfiguration::new(0, 0, 0, 0).is_valid());

        let mut config = PartyConfiguration::new(2, 1, 0, 0);
        config.total_people = 5;
        assert!(!config.is_valid());
    }
}
