//! Data analysis bundles: pandas summary, CSV processing, and plotting.
//!
//! All three ship the same sample CSV so the generated script runs
//! immediately without hunting for input data.

use super::{Bundle, TemplateFile};
use crate::classifier::Category;

pub(crate) static PANDAS_ANALYSIS: Bundle = Bundle {
    name: "pandas_analysis",
    category: Category::Data,
    files: &[
        TemplateFile {
            path: "main.py",
            body: ANALYSIS_PY,
        },
        TemplateFile {
            path: "data/input.csv",
            body: SAMPLE_CSV,
        },
        TemplateFile {
            path: "requirements.txt",
            body: REQUIREMENTS,
        },
    ],
    required: &["description", "input_csv"],
};

pub(crate) static CSV_PROCESSOR: Bundle = Bundle {
    name: "csv_processor",
    category: Category::Data,
    files: &[
        TemplateFile {
            path: "main.py",
            body: PROCESSOR_PY,
        },
        TemplateFile {
            path: "data/input.csv",
            body: SAMPLE_CSV,
        },
        TemplateFile {
            path: "requirements.txt",
            body: REQUIREMENTS,
        },
    ],
    required: &["description", "input_csv"],
};

pub(crate) static DATA_VISUALIZER: Bundle = Bundle {
    name: "data_visualizer",
    category: Category::Data,
    files: &[
        TemplateFile {
            path: "main.py",
            body: VISUALIZER_PY,
        },
        TemplateFile {
            path: "data/input.csv",
            body: SAMPLE_CSV,
        },
        TemplateFile {
            path: "requirements.txt",
            body: REQUIREMENTS,
        },
    ],
    required: &["description", "input_csv", "chart_title"],
};

const ANALYSIS_PY: &str = r#""""${description}"""

import sys

import pandas as pd

DEFAULT_CSV = "${input_csv}"


def main() -> None:
    path = sys.argv[1] if len(sys.argv) > 1 else DEFAULT_CSV
    df = pd.read_csv(path)

    print(f"Loaded {len(df)} rows from {path}")
    print()
    print("Column overview:")
    print(df.dtypes)
    print()
    print("Summary statistics:")
    print(df.describe(include="all"))

    numeric = df.select_dtypes("number")
    if not numeric.empty:
        print()
        print("Column totals:")
        print(numeric.sum())


if __name__ == "__main__":
    main()
"#;

const PROCESSOR_PY: &str = r#""""${description}"""

import csv
import sys

DEFAULT_CSV = "${input_csv}"


def process_row(row: dict) -> dict:
    # Transform each row here
    return row


def main() -> None:
    src = sys.argv[1] if len(sys.argv) > 1 else DEFAULT_CSV
    dest = sys.argv[2] if len(sys.argv) > 2 else "output.csv"

    with open(src, newline="") as f:
        reader = csv.DictReader(f)
        rows = [process_row(row) for row in reader]
        fieldnames = reader.fieldnames or []

    with open(dest, "w", newline="") as f:
        writer = csv.DictWriter(f, fieldnames=fieldnames)
        writer.writeheader()
        writer.writerows(rows)

    print(f"Processed {len(rows)} rows -> {dest}")


if __name__ == "__main__":
    main()
"#;

const VISUALIZER_PY: &str = r#""""${description}"""

import sys

import matplotlib

matplotlib.use("Agg")
import matplotlib.pyplot as plt
import pandas as pd

DEFAULT_CSV = "${input_csv}"


def main() -> None:
    path = sys.argv[1] if len(sys.argv) > 1 else DEFAULT_CSV
    df = pd.read_csv(path)

    numeric = df.select_dtypes("number")
    if numeric.empty:
        print("No numeric columns to plot.")
        return

    ax = numeric.plot(kind="bar", title="${chart_title}")
    ax.set_xticklabels(df[df.columns[0]], rotation=45, ha="right")
    plt.tight_layout()
    plt.savefig("chart.png")
    print("Saved chart.png")


if __name__ == "__main__":
    main()
"#;

const SAMPLE_CSV: &str = "\
name,value,category
Alpha,10,A
Beta,25,B
Gamma,15,A
Delta,30,B
Epsilon,20,A
";

const REQUIREMENTS: &str = "pandas>=2.0\nmatplotlib>=3.7\n";
