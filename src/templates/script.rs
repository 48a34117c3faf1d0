//! Plain automation script bundles.

use super::{Bundle, TemplateFile};
use crate::classifier::Category;

pub(crate) static BASIC_SCRIPT: Bundle = Bundle {
    name: "basic_script",
    category: Category::Script,
    files: &[TemplateFile {
        path: "main.py",
        body: BASIC_PY,
    }],
    required: &["description"],
};

pub(crate) static FILE_PROCESSOR: Bundle = Bundle {
    name: "file_processor",
    category: Category::Script,
    files: &[TemplateFile {
        path: "main.py",
        body: PROCESSOR_PY,
    }],
    required: &["description"],
};

pub(crate) static SCHEDULER: Bundle = Bundle {
    name: "scheduler",
    category: Category::Script,
    files: &[TemplateFile {
        path: "main.py",
        body: SCHEDULER_PY,
    }],
    required: &["description", "interval_secs"],
};

const BASIC_PY: &str = r#""""${description}"""

import sys


def run(args: list[str]) -> int:
    print(f"Running: {__doc__}")
    # Add your logic here
    return 0


if __name__ == "__main__":
    sys.exit(run(sys.argv[1:]))
"#;

const PROCESSOR_PY: &str = r#""""${description}"""

import sys
from pathlib import Path


def process(path: Path) -> None:
    print(f"Processing: {path}")
    # Add your processing logic here


def main() -> None:
    root = Path(sys.argv[1]) if len(sys.argv) > 1 else Path(".")
    count = 0
    for path in sorted(root.rglob("*")):
        if path.is_file():
            process(path)
            count += 1
    print(f"Processed {count} file(s) under {root}")


if __name__ == "__main__":
    main()
"#;

const SCHEDULER_PY: &str = r#""""${description}"""

import time

INTERVAL_SECONDS = ${interval_secs}


def task() -> None:
    print("Task executed.")


def main() -> None:
    print(f"Running every {INTERVAL_SECONDS}s; Ctrl-C to stop.")
    while True:
        started = time.monotonic()
        task()
        elapsed = time.monotonic() - started
        time.sleep(max(0.0, INTERVAL_SECONDS - elapsed))


if __name__ == "__main__":
    main()
"#;
