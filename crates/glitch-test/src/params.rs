//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use glitch_core::{ImageFormat, Pix};
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode and
/// whether every check so far has passed.
pub struct RegParams {
    /// Name of the test (e.g., "pixelsort")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create regression test parameters, with the mode taken from
    /// `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create regression test parameters with an explicit mode.
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        // Ensure directories exist
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `expected` and `actual` are within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality
    ///
    /// Returns `true` if both have the same size and every pixel matches.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        match pix1.count_pixel_diffs(pix2) {
            Err(_) => {
                let msg = format!(
                    "Failure in {}_reg: pix comparison for index {} - dimension mismatch",
                    self.test_name, self.index
                );
                self.fail(msg);
                false
            }
            Ok(diff) if diff.n_diff > 0 => {
                let msg = format!(
                    "Failure in {}_reg: pix comparison for index {} - {} pixels differ (max channel diff {})",
                    self.test_name, self.index, diff.n_diff, diff.max_diff
                );
                self.fail(msg);
                false
            }
            Ok(_) => true,
        }
    }

    /// Write an image to the regout directory and check it against its
    /// golden file
    ///
    /// In generate mode the written file becomes the golden file; in
    /// compare mode it must decode to the same pixels as the golden file;
    /// in display mode it is only written.
    pub fn write_pix_and_check(&mut self, pix: &Pix, format: ImageFormat) -> TestResult<()> {
        self.index += 1;

        let ext = format.extension();
        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            ext
        );

        glitch_io::write_image(pix, &local_path, format).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    let msg = format!(
                        "Failure in {}_reg: golden file not found: {}",
                        self.test_name, golden_path
                    );
                    self.fail(msg);
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                // Encoders may differ byte-wise; fall back to pixels
                if local_data != golden_data && !compare_image_files(local_path, &golden_path) {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Compare two image files pixel-by-pixel
fn compare_image_files(path1: &str, path2: &str) -> bool {
    match (glitch_io::read_image(path1), glitch_io::read_image(path2)) {
        (Ok(pix1), Ok(pix2)) => pix1.equals(&pix2),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glitch_core::Rgba;

    fn sample_pix() -> Pix {
        let data = (0..12u16).map(|i| Rgba::gray(i * 5000)).collect();
        Pix::from_pixels(4, 3, data).unwrap()
    }

    #[test]
    fn test_mode_from_env() {
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::with_mode("test", RegTestMode::Compare);
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert_eq!(rp.index(), 2);
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::with_mode("test", RegTestMode::Compare);
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_pix() {
        let mut rp = RegParams::with_mode("test", RegTestMode::Compare);
        let pix = sample_pix();
        assert!(rp.compare_pix(&pix, &pix.deep_clone()));

        let mut other = pix.to_mut();
        other.set_pixel(0, 0, Rgba::WHITE).unwrap();
        assert!(!rp.compare_pix(&pix, &other.into()));

        let small = Pix::new(2, 2).unwrap();
        assert!(!rp.compare_pix(&pix, &small));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_display_mode_writes_only() {
        let mut rp = RegParams::with_mode("params_display", RegTestMode::Display);
        rp.write_pix_and_check(&sample_pix(), ImageFormat::Png)
            .unwrap();
        let path = format!("{}/params_display.01.png", regout_dir());
        assert!(Path::new(&path).exists());
        assert!(rp.cleanup());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_generate_then_compare() {
        let pix = sample_pix();
        let golden = format!("{}/params_golden_golden.01.png", golden_dir());

        let mut rp = RegParams::with_mode("params_golden", RegTestMode::Generate);
        rp.write_pix_and_check(&pix, ImageFormat::Png).unwrap();
        assert!(rp.cleanup());
        assert!(Path::new(&golden).exists());

        let mut rp = RegParams::with_mode("params_golden", RegTestMode::Compare);
        rp.write_pix_and_check(&pix, ImageFormat::Png).unwrap();
        assert!(rp.cleanup());

        let mut changed = pix.to_mut();
        changed.set_pixel(1, 1, Rgba::BLACK).unwrap();
        let mut rp = RegParams::with_mode("params_golden", RegTestMode::Compare);
        rp.write_pix_and_check(&changed.into(), ImageFormat::Png)
            .unwrap();
        assert!(!rp.cleanup());

        let _ = fs::remove_file(golden);
        let _ = fs::remove_file(format!("{}/params_golden.01.png", regout_dir()));
    }

    #[test]
    fn test_compare_missing_golden() {
        let mut rp = RegParams::with_mode("params_missing", RegTestMode::Compare);
        rp.write_pix_and_check(&sample_pix(), ImageFormat::Png)
            .unwrap();
        assert!(!rp.is_success());
        let _ = fs::remove_file(format!("{}/params_missing.01.png", regout_dir()));
    }
}
