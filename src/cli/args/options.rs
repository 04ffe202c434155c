use clap::ValueEnum;
use hima_admin::Category;

/// Category filters accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum CategoryArg {
	All,
	Article,
	Activity,
	Member,
	Division,
}

impl From<CategoryArg> for Category {
	fn from(arg: CategoryArg) -> Self {
		match arg {
			CategoryArg::All => Category::All,
			CategoryArg::Article => Category::Article,
			CategoryArg::Activity => Category::Activity,
			CategoryArg::Member => Category::Member,
			CategoryArg::Division => Category::Division,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
