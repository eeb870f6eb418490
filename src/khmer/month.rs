//! Lunar months, their lengths and their order.

use crate::error::ChhankitekError;

/// Lunar month. Discriminants are the canonical almanac indices.
///
/// `PathamAsath` and `DutiyaAsath` (first and second Asath) replace `Asath`
/// in leap-month years.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum LunarMonth {
    /// មិគសិរ
    Mikasir = 0,
    /// បុស្ស
    Bos = 1,
    /// មាឃ
    Meak = 2,
    /// ផល្គុន
    Phalkun = 3,
    /// ចេត្រ
    Chetr = 4,
    /// ពិសាខ
    Pisak = 5,
    /// ជេស្ឋ
    Chesth = 6,
    /// អាសាឍ
    Asath = 7,
    /// ស្រាពណ៍
    Srap = 8,
    /// ភទ្របទ
    Phoutrobot = 9,
    /// អស្សុជ
    Assoch = 10,
    /// កក្ដិក
    Kadoek = 11,
    /// បឋមាសាឍ
    PathamAsath = 12,
    /// ទុតិយាសាឍ
    DutiyaAsath = 13,
}

impl LunarMonth {
    /// All months, in index order.
    pub const ALL: [LunarMonth; 14] = [
        Self::Mikasir,
        Self::Bos,
        Self::Meak,
        Self::Phalkun,
        Self::Chetr,
        Self::Pisak,
        Self::Chesth,
        Self::Asath,
        Self::Srap,
        Self::Phoutrobot,
        Self::Assoch,
        Self::Kadoek,
        Self::PathamAsath,
        Self::DutiyaAsath,
    ];

    /// Canonical index, `0..=13`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether this is one of the two months only found in leap-month years.
    pub fn is_intercalary(self) -> bool {
        matches!(self, Self::PathamAsath | Self::DutiyaAsath)
    }

    /// Number of days in the month.
    ///
    /// Months alternate 29 and 30 days starting from Mikasir. Chesth gains a
    /// day in leap-day years; both Asath of a leap-month year have 30.
    ///
    /// # Example
    ///
    /// ```
    /// use chhankitek::khmer::LunarMonth;
    ///
    /// assert_eq!(29, LunarMonth::Mikasir.days(false));
    /// assert_eq!(30, LunarMonth::Bos.days(false));
    /// assert_eq!(30, LunarMonth::Chesth.days(true));
    /// ```
    pub fn days(self, leap_day_year: bool) -> u32 {
        match self {
            Self::Chesth if leap_day_year => 30,
            Self::PathamAsath | Self::DutiyaAsath => 30,
            _ if self.index() % 2 == 0 => 29,
            _ => 30,
        }
    }

    /// The month after this one.
    ///
    /// # Example
    ///
    /// ```
    /// use chhankitek::khmer::LunarMonth::*;
    ///
    /// assert_eq!(PathamAsath, Chesth.next(true));
    /// assert_eq!(Asath, Chesth.next(false));
    /// assert_eq!(Mikasir, Kadoek.next(false));
    /// ```
    pub fn next(self, leap_month_year: bool) -> Self {
        use LunarMonth::*;
        match self {
            Mikasir => Bos,
            Bos => Meak,
            Meak => Phalkun,
            Phalkun => Chetr,
            Chetr => Pisak,
            Pisak => Chesth,
            Chesth if leap_month_year => PathamAsath,
            Chesth => Asath,
            Asath => Srap,
            PathamAsath => DutiyaAsath,
            DutiyaAsath => Srap,
            Srap => Phoutrobot,
            Phoutrobot => Assoch,
            Assoch => Kadoek,
            Kadoek => Mikasir,
        }
    }

    /// Months of one cycle, from Mikasir up to (excluding) the next Mikasir.
    pub fn months_in_year(leap_month_year: bool) -> Vec<LunarMonth> {
        let mut months = vec![Self::Mikasir];
        let mut month = Self::Mikasir.next(leap_month_year);
        while month != Self::Mikasir {
            months.push(month);
            month = month.next(leap_month_year);
        }
        months
    }
}

impl TryFrom<u8> for LunarMonth {
    type Error = ChhankitekError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(ChhankitekError::UnmappedMonthSuccessor { index })
    }
}

/// Successor of a month given by raw index.
pub fn next_month_index(index: u8, leap_month_year: bool) -> Result<u8, ChhankitekError> {
    Ok(LunarMonth::try_from(index)?.next(leap_month_year).index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use LunarMonth::*;

    #[test]
    fn lengths() {
        for (std, month) in [
            (29, Mikasir),
            (30, Bos),
            (29, Meak),
            (30, Phalkun),
            (29, Chetr),
            (30, Pisak),
            (29, Chesth),
            (30, Asath),
            (29, Srap),
            (30, Phoutrobot),
            (29, Assoch),
            (30, Kadoek),
            (30, PathamAsath),
            (30, DutiyaAsath),
        ] {
            assert_eq!(std, month.days(false), "{month:?}");
        }
        assert_eq!(30, Chesth.days(true));
        assert_eq!(29, Meak.days(true));
    }

    #[test]
    fn regular_cycle() {
        let cycle = LunarMonth::months_in_year(false);
        assert_eq!(12, cycle.len());
        assert_eq!(
            vec![
                Mikasir, Bos, Meak, Phalkun, Chetr, Pisak, Chesth, Asath, Srap, Phoutrobot, Assoch,
                Kadoek
            ],
            cycle
        );
        assert!(!cycle.iter().any(|m| m.is_intercalary()));
        assert_eq!(354, cycle.iter().map(|m| m.days(false)).sum::<u32>());
    }

    #[test]
    fn leap_month_cycle() {
        let cycle = LunarMonth::months_in_year(true);
        assert_eq!(13, cycle.len());
        assert_eq!(&[Chesth, PathamAsath, DutiyaAsath, Srap], &cycle[6..10]);
        assert!(!cycle.contains(&Asath));
        assert_eq!(384, cycle.iter().map(|m| m.days(false)).sum::<u32>());
    }

    #[test]
    fn indices() {
        for (i, month) in LunarMonth::ALL.iter().enumerate() {
            assert_eq!(i, usize::from(month.index()));
            assert_eq!(Ok(*month), LunarMonth::try_from(i as u8));
        }
    }

    #[test]
    fn unmapped_index() {
        assert_eq!(
            Err(ChhankitekError::UnmappedMonthSuccessor { index: 14 }),
            LunarMonth::try_from(14)
        );
        assert_eq!(
            Err(ChhankitekError::UnmappedMonthSuccessor { index: 200 }),
            next_month_index(200, false)
        );
        assert_eq!(Ok(12), next_month_index(6, true));
        assert_eq!(Ok(8), next_month_index(13, true));
    }
}
