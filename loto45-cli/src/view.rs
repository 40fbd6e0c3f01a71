use loto45_db::models::{Frequency, History, PICK_COUNT, POOL_SIZE};

/// Bande de couleur d'une boule (couleurs officielles du Loto 6/45).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Yellow,
    Blue,
    Red,
    Grey,
    Green,
}

impl Band {
    pub fn from_number(n: u8) -> Self {
        match n {
            1..=10 => Band::Yellow,
            11..=20 => Band::Blue,
            21..=30 => Band::Red,
            31..=40 => Band::Grey,
            _ => Band::Green,
        }
    }

    pub fn range_label(&self) -> &'static str {
        match self {
            Band::Yellow => "1-10",
            Band::Blue => "11-20",
            Band::Red => "21-30",
            Band::Grey => "31-40",
            Band::Green => "41-45",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub time: String,
    pub numbers: [u8; PICK_COUNT],
    pub bonus: u8,
}

pub fn history_view(history: &History, limit: usize) -> Vec<HistoryRow> {
    history
        .draws()
        .iter()
        .take(limit)
        .map(|draw| HistoryRow {
            time: draw.time.clone(),
            numbers: draw.numbers,
            bonus: draw.bonus,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub number: u8,
    pub band: Band,
    pub count: u32,
}

/// Une cellule par numéro du pool, y compris ceux jamais tirés.
pub fn stats_view(frequency: &Frequency) -> Vec<StatCell> {
    (1..=POOL_SIZE)
        .map(|n| StatCell {
            number: n,
            band: Band::from_number(n),
            count: frequency.count(n),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use loto45_db::models::Draw;

    fn test_draw(numbers: [u8; 6], bonus: u8, time: &str) -> Draw {
        Draw {
            numbers,
            bonus,
            time: time.to_string(),
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Band::from_number(1), Band::Yellow);
        assert_eq!(Band::from_number(10), Band::Yellow);
        assert_eq!(Band::from_number(11), Band::Blue);
        assert_eq!(Band::from_number(20), Band::Blue);
        assert_eq!(Band::from_number(21), Band::Red);
        assert_eq!(Band::from_number(30), Band::Red);
        assert_eq!(Band::from_number(31), Band::Grey);
        assert_eq!(Band::from_number(40), Band::Grey);
        assert_eq!(Band::from_number(41), Band::Green);
        assert_eq!(Band::from_number(45), Band::Green);
    }

    #[test]
    fn test_history_view_limit_and_order() {
        let mut history = History::default();
        history.record(test_draw([1, 2, 3, 4, 5, 6], 7, "10:00"));
        history.record(test_draw([10, 11, 12, 13, 14, 15], 16, "10:01"));
        history.record(test_draw([20, 21, 22, 23, 24, 25], 26, "10:02"));

        let rows = history_view(&history, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time, "10:02");
        assert_eq!(rows[1].time, "10:01");
    }

    #[test]
    fn test_stats_view_covers_full_pool() {
        let mut frequency = Frequency::default();
        frequency.record(&test_draw([1, 2, 3, 4, 5, 6], 45, "10:00"));

        let cells = stats_view(&frequency);
        assert_eq!(cells.len(), 45);
        assert_eq!(cells[0].number, 1);
        assert_eq!(cells[0].count, 1);
        assert_eq!(cells[44].number, 45);
        assert_eq!(cells[44].count, 1);
        assert_eq!(cells[6].count, 0);
    }
}
