//! Fixed-width comparison table and summary.
//!
//! All figures are integer-truncated: KiB is `bytes / 1024`, ratios are
//! `primary * 100 / secondary`.

use std::io::{self, Write};
use std::path::Path;

use crate::domain::{DomainSchema, Primary, Secondary};
use crate::schema::{ComparisonStats, FileResult, StaticSizes, Summary};

const KIB: u64 = 1024;
const NAME_WIDTH: usize = 40;

/// `primary` as an integer percentage of `secondary`; `None` when `secondary` is zero.
pub fn ratio(primary: u64, secondary: u64) -> Option<u64> {
    primary.saturating_mul(100).checked_div(secondary)
}

pub fn bytes_ratio(stats: &ComparisonStats) -> Option<u64> {
    ratio(stats.primary.bytes, stats.secondary.bytes)
}

/// Order rows by ascending benchmark ratio. Ties keep collection order; rows
/// without a ratio go last.
pub fn sort_by_benchmark_ratio<T>(rows: &mut [T], result_of: impl Fn(&T) -> &FileResult) {
    rows.sort_by_key(|row| match bytes_ratio(&result_of(row).benchmark) {
        Some(r) => (false, r),
        None => (true, 0),
    });
}

/// Benchmark-strategy averages over all measured files.
pub fn summarize<'a>(results: impl IntoIterator<Item = &'a FileResult>) -> Option<Summary> {
    let mut files = 0usize;
    let mut primary = 0u64;
    let mut secondary = 0u64;
    for result in results {
        files += 1;
        primary += result.benchmark.primary.bytes;
        secondary += result.benchmark.secondary.bytes;
    }
    if files == 0 {
        return None;
    }

    let avg_primary_bytes = primary / files as u64;
    let avg_secondary_bytes = secondary / files as u64;
    Some(Summary {
        files,
        avg_primary_bytes,
        avg_secondary_bytes,
        avg_ratio: ratio(avg_primary_bytes, avg_secondary_bytes),
    })
}

fn fmt_ratio(r: Option<u64>) -> String {
    r.map_or_else(|| "N/A".to_string(), |r| r.to_string())
}

pub fn write_static_sizes(out: &mut impl Write, sizes: &StaticSizes) -> io::Result<()> {
    writeln!(out, "size_of() of each domain struct")?;
    writeln!(out, " * {:<10}: {} bytes", Primary::NAME, sizes.primary)?;
    writeln!(out, " * {:<10}: {} bytes", Secondary::NAME, sizes.secondary)?;
    writeln!(out)
}

pub fn write_header(out: &mut impl Write, footer: bool) -> io::Result<()> {
    if !footer {
        writeln!(
            out,
            "compared:bytes is the percentage of {} in comparison to {}",
            Primary::NAME,
            Secondary::NAME
        )?;
        writeln!(
            out,
            "e.g: Value: 111, means the {} domain struct is 11% bigger than the {} domain struct",
            Primary::NAME,
            Secondary::NAME
        )?;
        writeln!(out)?;
    }
    writeln!(
        out,
        "{:>NAME_WIDTH$} | {:>19} | <------- {} ----> | <-------- {} -----> |",
        "",
        "",
        Primary::NAME,
        Secondary::NAME
    )?;
    writeln!(
        out,
        "{:>NAME_WIDTH$} | compared: bytes (%) |  benchmark  |   runtime   |  benchmark  |   runtime   |",
        ""
    )?;
    writeln!(
        out,
        "{:>NAME_WIDTH$} | benchmark | runtime | KiB | alloc | KiB | alloc | KiB | alloc | KiB | alloc |",
        "filename"
    )
}

pub fn write_row(out: &mut impl Write, path: &Path, result: &FileResult) -> io::Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    let bench = &result.benchmark;
    let runt = &result.runtime;

    writeln!(
        out,
        "{:>NAME_WIDTH$.NAME_WIDTH$} | {:>9} | {:>7} | {:>3} | {:>5} | {:>3} | {:>5} | {:>3} | {:>5} | {:>3} | {:>5} |",
        name,
        fmt_ratio(bytes_ratio(bench)),
        fmt_ratio(bytes_ratio(runt)),
        bench.primary.bytes / KIB,
        bench.primary.allocs,
        runt.primary.bytes / KIB,
        runt.primary.allocs,
        bench.secondary.bytes / KIB,
        bench.secondary.allocs,
        runt.secondary.bytes / KIB,
        runt.secondary.allocs,
    )
}

pub fn write_summary(out: &mut impl Write, summary: Option<&Summary>) -> io::Result<()> {
    let Some(s) = summary else {
        return writeln!(out, "no input files measured");
    };
    writeln!(
        out,
        "The average size of {:<10}: {} KiB",
        Primary::NAME,
        s.avg_primary_bytes / KIB
    )?;
    writeln!(
        out,
        "The average size of {:<10}: {} KiB",
        Secondary::NAME,
        s.avg_secondary_bytes / KIB
    )?;
    writeln!(
        out,
        "In average, {} is {} % compared to {}",
        Primary::NAME,
        fmt_ratio(s.avg_ratio),
        Secondary::NAME
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MemoryStat;
    use std::path::PathBuf;

    fn result(primary: u64, secondary: u64) -> FileResult {
        let stats = ComparisonStats {
            primary: MemoryStat {
                bytes: primary,
                allocs: 10,
            },
            secondary: MemoryStat {
                bytes: secondary,
                allocs: 7,
            },
        };
        FileResult {
            benchmark: stats,
            runtime: stats,
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn ratio_is_floored_percentage() {
        assert_eq!(ratio(150, 100), Some(150));
        assert_eq!(ratio(1, 3), Some(33));
        assert_eq!(ratio(2, 3), Some(66));
    }

    #[test]
    fn ratio_with_zero_secondary_is_none() {
        assert_eq!(ratio(150, 0), None);
    }

    #[test]
    fn sort_is_stable_and_ascending() {
        let mut rows = vec![
            (PathBuf::from("a.xml"), result(50, 100)),
            (PathBuf::from("b.xml"), result(30, 100)),
            (PathBuf::from("c.xml"), result(30, 100)),
            (PathBuf::from("d.xml"), result(80, 100)),
        ];
        sort_by_benchmark_ratio(&mut rows, |(_, r)| r);

        let names: Vec<_> = rows.iter().map(|(p, _)| p.to_str().unwrap()).collect();
        assert_eq!(names, ["b.xml", "c.xml", "a.xml", "d.xml"]);
    }

    #[test]
    fn rows_without_ratio_sort_last() {
        let mut rows = vec![
            (PathBuf::from("zero.xml"), result(10, 0)),
            (PathBuf::from("big.xml"), result(900, 100)),
        ];
        sort_by_benchmark_ratio(&mut rows, |(_, r)| r);
        assert_eq!(rows[0].0, PathBuf::from("big.xml"));
    }

    #[test]
    fn averages_are_truncated_kib() {
        let results = [result(1024, 512), result(2048, 512), result(3072, 512)];
        let s = summarize(&results).unwrap();

        assert_eq!(s.files, 3);
        assert_eq!(s.avg_primary_bytes, 2048);
        assert_eq!(s.avg_primary_bytes / KIB, 2);
        assert_eq!(s.avg_ratio, Some(400));
    }

    #[test]
    fn summary_uses_benchmark_strategy_only() {
        let mut r = result(2048, 1024);
        r.runtime.primary.bytes = 1;
        let s = summarize([&r]).unwrap();
        assert_eq!(s.avg_primary_bytes, 2048);
    }

    #[test]
    fn empty_collection_has_no_summary() {
        assert_eq!(summarize(&[] as &[FileResult]), None);
        let text = render(|out| write_summary(out, None));
        assert_eq!(text, "no input files measured\n");
    }

    #[test]
    fn row_layout() {
        let text = render(|out| write_row(out, Path::new("/vms/guest.xml"), &result(150 * 1024, 100 * 1024)));

        assert_eq!(
            text,
            format!(
                "{:>40} |       150 |     150 | 150 |    10 | 150 |    10 | 100 |     7 | 100 |     7 |\n",
                "guest.xml"
            )
        );
    }

    #[test]
    fn long_names_are_truncated() {
        let long = format!("{}.xml", "x".repeat(60));
        let text = render(|out| write_row(out, Path::new(&long), &result(1, 1)));
        let name_col = text.split(" | ").next().unwrap();
        assert_eq!(name_col, "x".repeat(40));
    }

    #[test]
    fn zero_secondary_renders_na() {
        let text = render(|out| write_row(out, Path::new("z.xml"), &result(1, 0)));
        assert!(text.contains("|       N/A |     N/A |"));
    }

    #[test]
    fn header_and_footer() {
        let header = render(|out| write_header(out, false));
        let footer = render(|out| write_header(out, true));

        assert!(header.starts_with("compared:bytes is the percentage of libvirtxml in comparison to kubevirt\n"));
        assert_eq!(header.lines().count(), 6);
        assert_eq!(footer.lines().count(), 3);
        assert!(header.ends_with(&footer));
        assert_eq!(
            footer.lines().next().unwrap().trim_start(),
            format!("| {:19} | <------- libvirtxml ----> | <-------- kubevirt -----> |", "")
        );
    }

    #[test]
    fn static_sizes_block() {
        let text = render(|out| {
            write_static_sizes(
                out,
                &StaticSizes {
                    primary: 480,
                    secondary: 2112,
                },
            )
        });
        assert!(text.contains(" * libvirtxml: 480 bytes\n"));
        assert!(text.contains(" * kubevirt  : 2112 bytes\n"));
    }
}
