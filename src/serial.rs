//! Plain-text reading and writing of points, vectors, and matrices.
//!
//! All formatting goes through a [`SepConfig`], which picks the separator
//! between elements, the separator between groups (matrix rows), and
//! whether a leading count header is emitted and checked. The defaults
//! (space, newline, no header) give the classic whitespace table format.

use core::fmt::{self, Write};
use core::str::FromStr;

use crate::matrix::Matrix;
use crate::point::Point;
use crate::traits::Scalar;
use crate::vector::Vector;

/// Separator configuration for the text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SepConfig {
    /// Separator between elements of a point, vector, or matrix row.
    pub element: char,
    /// Separator between groups (matrix rows).
    pub group: char,
    /// Emit and require a leading count header (`N` for vectors and
    /// points, `M N` for matrices).
    pub counted: bool,
}

impl Default for SepConfig {
    fn default() -> Self {
        Self {
            element: ' ',
            group: '\n',
            counted: false,
        }
    }
}

/// Errors from parsing the text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The element count (declared or actual) does not match the target
    /// dimensions.
    Count { expected: usize, found: usize },
    /// A token failed to parse as a number.
    BadNumber,
    /// The input ended before all elements were read.
    Truncated,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Count { expected, found } => {
                write!(f, "expected {} elements, found {}", expected, found)
            }
            ParseError::BadNumber => write!(f, "malformed number"),
            ParseError::Truncated => write!(f, "input ended early"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl SepConfig {
    /// Write the elements of a vector.
    pub fn write_vector<W: Write, T: fmt::Display, const N: usize>(
        &self,
        w: &mut W,
        v: &Vector<T, N>,
    ) -> fmt::Result {
        if self.counted {
            write!(w, "{}{}", N, self.element)?;
        }
        self.write_row(w, v.as_slice())
    }

    /// Write the coordinates of a point.
    pub fn write_point<W: Write, T: fmt::Display, const N: usize>(
        &self,
        w: &mut W,
        p: &Point<T, N>,
    ) -> fmt::Result {
        if self.counted {
            write!(w, "{}{}", N, self.element)?;
        }
        self.write_row(w, p.as_slice())
    }

    /// Write a matrix, one row per group.
    pub fn write_matrix<W: Write, T: fmt::Display, const M: usize, const N: usize>(
        &self,
        w: &mut W,
        m: &Matrix<T, M, N>,
    ) -> fmt::Result {
        if self.counted {
            write!(w, "{}{}{}{}", M, self.element, N, self.group)?;
        }
        for i in 0..M {
            if i > 0 {
                w.write_char(self.group)?;
            }
            self.write_row(w, m.row_slice(i))?;
        }
        Ok(())
    }

    fn write_row<W: Write, T: fmt::Display>(&self, w: &mut W, row: &[T]) -> fmt::Result {
        for (i, x) in row.iter().enumerate() {
            if i > 0 {
                w.write_char(self.element)?;
            }
            write!(w, "{}", x)?;
        }
        Ok(())
    }

    /// Parse a vector. Both separators are accepted between elements;
    /// empty tokens (runs of separators) are skipped.
    pub fn parse_vector<T: Scalar + FromStr, const N: usize>(
        &self,
        s: &str,
    ) -> Result<Vector<T, N>, ParseError> {
        let coords = self.parse_flat::<T, N>(s)?;
        Ok(Vector::from_array(coords))
    }

    /// Parse a point.
    pub fn parse_point<T: Scalar + FromStr, const N: usize>(
        &self,
        s: &str,
    ) -> Result<Point<T, N>, ParseError> {
        let coords = self.parse_flat::<T, N>(s)?;
        Ok(Point::from_array(coords))
    }

    /// Parse a matrix. Rows are split on the group separator; a counted
    /// header occupies the first group.
    pub fn parse_matrix<T: Scalar + FromStr, const M: usize, const N: usize>(
        &self,
        s: &str,
    ) -> Result<Matrix<T, M, N>, ParseError> {
        let mut groups = s
            .split(self.group)
            .map(str::trim)
            .filter(|g| !g.is_empty());

        if self.counted {
            let header = groups.next().ok_or(ParseError::Truncated)?;
            let mut dims = header.split(self.element).filter(|t| !t.is_empty());
            let rows = parse_count(dims.next())?;
            let cols = parse_count(dims.next())?;
            if rows != M {
                return Err(ParseError::Count {
                    expected: M,
                    found: rows,
                });
            }
            if cols != N {
                return Err(ParseError::Count {
                    expected: N,
                    found: cols,
                });
            }
        }

        let mut m = Matrix::zeros();
        for i in 0..M {
            let row = groups.next().ok_or(ParseError::Truncated)?;
            let parsed = self.parse_row::<T, N>(row)?;
            m.as_mut_slice()[i * N..(i + 1) * N].copy_from_slice(&parsed);
        }
        if groups.next().is_some() {
            return Err(ParseError::Count {
                expected: M,
                found: M + 1,
            });
        }
        Ok(m)
    }

    fn parse_flat<T: Scalar + FromStr, const N: usize>(
        &self,
        s: &str,
    ) -> Result<[T; N], ParseError> {
        let element = self.element;
        let group = self.group;
        let mut tokens = s
            .split(move |c: char| c == element || c == group)
            .filter(|t| !t.is_empty());

        if self.counted {
            let declared = parse_count(tokens.next())?;
            if declared != N {
                return Err(ParseError::Count {
                    expected: N,
                    found: declared,
                });
            }
        }

        let mut out = [T::zero(); N];
        for slot in out.iter_mut() {
            let tok = tokens.next().ok_or(ParseError::Truncated)?;
            *slot = tok.parse().map_err(|_| ParseError::BadNumber)?;
        }
        match tokens.count() {
            0 => Ok(out),
            extra => Err(ParseError::Count {
                expected: N,
                found: N + extra,
            }),
        }
    }

    fn parse_row<T: Scalar + FromStr, const N: usize>(
        &self,
        row: &str,
    ) -> Result<[T; N], ParseError> {
        let mut tokens = row.split(self.element).filter(|t| !t.is_empty());
        let mut out = [T::zero(); N];
        for slot in out.iter_mut() {
            let tok = tokens.next().ok_or(ParseError::Truncated)?;
            *slot = tok.parse().map_err(|_| ParseError::BadNumber)?;
        }
        match tokens.count() {
            0 => Ok(out),
            extra => Err(ParseError::Count {
                expected: N,
                found: N + extra,
            }),
        }
    }
}

fn parse_count(token: Option<&str>) -> Result<usize, ParseError> {
    token
        .ok_or(ParseError::Truncated)?
        .parse()
        .map_err(|_| ParseError::BadNumber)
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const N: usize> fmt::Display for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, self.as_slice())
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, self.as_slice())
    }
}

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..M {
            if i > 0 {
                f.write_char('\n')?;
            }
            f.write_char('|')?;
            for (j, x) in self.row_slice(i).iter().enumerate() {
                if j > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{}", x)?;
            }
            f.write_char('|')?;
        }
        Ok(())
    }
}

fn write_tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, xs: &[T]) -> fmt::Result {
    f.write_char('(')?;
    for (i, x) in xs.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", x)?;
    }
    f.write_char(')')
}
