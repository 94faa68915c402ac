use rgb565_dither::DitherAlgorithm;
use serde::Serialize;

/// Serializable description of one algorithm's kernel, for `dithering algorithms`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KernelInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub divisor: u8,
    pub taps: Vec<Tap>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tap {
    pub dx: i32,
    pub dy: i32,
    pub weight: u8,
}

impl KernelInfo {
    pub fn for_algorithm(algorithm: DitherAlgorithm) -> Self {
        let kernel = algorithm.kernel();
        Self {
            name: algorithm.name(),
            label: algorithm.label(),
            divisor: kernel.divisor,
            taps: kernel
                .entries
                .iter()
                .map(|&(dx, dy, weight)| Tap { dx, dy, weight })
                .collect(),
        }
    }

    pub fn all() -> Vec<Self> {
        DitherAlgorithm::ALL
            .into_iter()
            .map(Self::for_algorithm)
            .collect()
    }

    /// Weight grid with `X` at the current pixel, e.g. for Floyd-Steinberg:
    ///
    /// ```text
    ///      X  7
    ///   3  5  1
    /// ```
    pub fn diagram(&self) -> String {
        let min_dx = self.taps.iter().map(|t| t.dx).min().unwrap_or(0).min(0);
        let max_dx = self.taps.iter().map(|t| t.dx).max().unwrap_or(0).max(0);
        let max_dy = self.taps.iter().map(|t| t.dy).max().unwrap_or(0).max(0);

        let mut lines = Vec::new();
        for dy in 0..=max_dy {
            let mut line = String::new();
            for dx in min_dx..=max_dx {
                let cell = if dx == 0 && dy == 0 {
                    "X".to_string()
                } else {
                    self.taps
                        .iter()
                        .find(|t| t.dx == dx && t.dy == dy)
                        .map(|t| t.weight.to_string())
                        .unwrap_or_default()
                };
                line.push_str(&format!("{cell:>3}"));
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}
