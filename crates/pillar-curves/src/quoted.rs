//! Quoted bid/ask rate curve.
//!
//! A [`QuotedRateCurve`] is built from sparse (date, bid, ask) pillars
//! and answers rate lookups for arbitrary dates: linear interpolation
//! between pillars, flat extrapolation beyond the last one.

use pillar_core::types::Date;

use crate::error::{CurveError, CurveResult};
use crate::interpolation::{lerp, locate, SegmentHit};
use crate::kind::RateKind;
use crate::point::TenorPoint;

/// A rate curve built from quoted bid/ask pillars.
///
/// The curve owns an ascending sequence of pillars measured in days from
/// its anchor date (the first quoted date, at offset zero). A lookup
/// resolves a calendar date to a rate of the requested [`RateKind`]:
///
/// - dates before the anchor are rejected,
/// - dates at or beyond the last pillar take the last rate unchanged
///   (flat extrapolation),
/// - anything in between reads the pillar rate on an exact hit or
///   interpolates linearly on the day axis.
///
/// The curve never changes after construction and holds no interior
/// mutability, so sharing it across threads for concurrent lookups needs
/// no locking.
///
/// # Example
///
/// ```rust
/// use pillar_core::types::Date;
/// use pillar_curves::{QuotedRateCurve, RateKind};
///
/// let dates = vec![
///     Date::from_ymd(2024, 5, 17).unwrap(),
///     Date::from_ymd(2024, 8, 15).unwrap(),
///     Date::from_ymd(2024, 11, 13).unwrap(),
/// ];
/// let curve = QuotedRateCurve::new(
///     dates,
///     vec![4.50, 5.00, 6.00],
///     vec![4.55, 5.05, 6.05],
/// ).unwrap();
///
/// let pillar = Date::from_ymd(2024, 11, 13).unwrap();
/// assert_eq!(curve.rate(pillar, RateKind::Bid).unwrap(), 6.00);
/// ```
#[derive(Debug, Clone)]
pub struct QuotedRateCurve {
    anchor: Date,
    points: Vec<TenorPoint>,
}

impl QuotedRateCurve {
    /// Builds a curve from quoted pillars.
    ///
    /// The first date becomes the anchor; every pillar's offset is its
    /// day difference from the anchor, so the first pillar sits at
    /// offset zero. Mid rates are derived here as the bid/ask average.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequences differ in length, are empty, or
    /// the dates are not strictly ascending.
    pub fn new(dates: Vec<Date>, bid_rates: Vec<f64>, ask_rates: Vec<f64>) -> CurveResult<Self> {
        if dates.len() != bid_rates.len() || dates.len() != ask_rates.len() {
            return Err(CurveError::length_mismatch(
                dates.len(),
                bid_rates.len(),
                ask_rates.len(),
            ));
        }
        let Some(&anchor) = dates.first() else {
            return Err(CurveError::insufficient_points(1, 0));
        };
        for i in 1..dates.len() {
            if dates[i] <= dates[i - 1] {
                return Err(CurveError::non_monotonic_dates(i, dates[i - 1], dates[i]));
            }
        }

        let anchor_day = anchor.to_day_number();
        let points = dates
            .iter()
            .zip(bid_rates.into_iter().zip(ask_rates))
            .map(|(date, (bid, ask))| {
                let offset = (date.to_day_number() - anchor_day) as f64;
                TenorPoint::new(offset, bid, ask)
            })
            .collect();

        Ok(Self { anchor, points })
    }

    /// Returns the rate of `kind` at `date`.
    ///
    /// Exact pillar hits return the stored rate; dates between pillars
    /// interpolate linearly on the day axis; dates at or beyond the last
    /// pillar return the last rate unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DateBeforeCurve`] if `date` precedes the
    /// curve's anchor date.
    pub fn rate(&self, date: Date, kind: RateKind) -> CurveResult<f64> {
        let days =
            (date.to_day_number() - self.anchor.to_day_number()) as f64 - self.points[0].offset();
        if days < 0.0 {
            return Err(CurveError::date_before_curve(date, self.anchor));
        }

        // Flat extrapolation. The >= also covers a query landing exactly
        // on the last pillar, which has no right-hand bracket.
        let last = self.points[self.points.len() - 1];
        if days >= last.offset() {
            return Ok(last.rate(kind));
        }

        match locate(&self.points, days) {
            SegmentHit::Exact(i) => Ok(self.points[i].rate(kind)),
            SegmentHit::Bracket(i) => {
                let lo = self.points[i];
                let hi = self.points[i + 1];
                Ok(lerp(
                    days,
                    lo.offset(),
                    hi.offset(),
                    lo.rate(kind),
                    hi.rate(kind),
                ))
            }
        }
    }

    /// The curve's anchor date (first quoted pillar, offset zero).
    #[must_use]
    pub fn anchor_date(&self) -> Date {
        self.anchor
    }

    /// The last quoted date; queries at or beyond it extrapolate flat.
    #[must_use]
    pub fn max_date(&self) -> Date {
        self.anchor
            .add_days(self.points[self.points.len() - 1].offset() as i64)
    }

    /// Number of quoted pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no pillars.
    ///
    /// Construction rejects empty input, so this only returns true for a
    /// curve that was never successfully built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The quoted pillars, ascending by offset.
    #[must_use]
    pub fn points(&self) -> &[TenorPoint] {
        &self.points
    }
}
