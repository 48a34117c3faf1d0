//! argparse command-line tool bundle.
//!
//! The request text is embedded only inside the module docstring (triple
//! quoted), never inside single-quoted string literals, so free-text quotes
//! cannot break the generated source.

use super::{Bundle, TemplateFile};
use crate::classifier::Category;

pub(crate) static ARGPARSE_TOOL: Bundle = Bundle {
    name: "argparse_tool",
    category: Category::Cli,
    files: &[
        TemplateFile {
            path: "main.py",
            body: MAIN_PY,
        },
        TemplateFile {
            path: "requirements.txt",
            body: REQUIREMENTS,
        },
    ],
    required: &["tool_name", "description", "command"],
};

const MAIN_PY: &str = r#""""${description}"""

import argparse


def cmd_${command}(args: argparse.Namespace) -> None:
    if args.verbose:
        print(f"running ${command} on {len(args.paths)} path(s)")
    for path in args.paths:
        # Do the real work here
        print(f"${command}: {path}")


def build_parser() -> argparse.ArgumentParser:
    parser = argparse.ArgumentParser(prog="${tool_name}", description=__doc__)
    parser.add_argument(
        "-v", "--verbose", action="store_true", help="enable verbose output"
    )

    subparsers = parser.add_subparsers(dest="subcommand", required=True)

    sub = subparsers.add_parser("${command}", help="default operation")
    sub.add_argument("paths", nargs="*", default=["."], help="paths to operate on")
    sub.set_defaults(func=cmd_${command})

    return parser


def main() -> None:
    parser = build_parser()
    args = parser.parse_args()
    args.func(args)


if __name__ == "__main__":
    main()
"#;

const REQUIREMENTS: &str = "# stdlib only; no third-party packages required\n";
