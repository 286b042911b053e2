use std::{fmt::Display, str::FromStr};

use super::language::Descriptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Revert,
    Wip,
}

impl CommitType {
    /// Types offered by default.
    pub const STANDARD: [CommitType; 7] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Chore,
    ];

    /// Every known type in catalogue order.
    pub const EXTENDED: [CommitType; 10] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Revert,
        CommitType::Wip,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
            CommitType::Wip => "WIP",
        }
    }

    pub fn descriptions(&self) -> Descriptions {
        let (en, zh) = match self {
            CommitType::Feat => ("A new feature", "新功能"),
            CommitType::Fix => ("A bug fix", "修复bug"),
            CommitType::Docs => ("Documentation only changes", "修改文档"),
            CommitType::Style => (
                "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
                "改动的代码不影响代码含义（空格、格式和换行等）",
            ),
            CommitType::Refactor => (
                "A code change that neither fixes a bug nor adds a feature",
                "既不修复错误也不添加功能的代码更改",
            ),
            CommitType::Perf => ("A code change that improves performance", "提高性能的代码更改"),
            CommitType::Test => ("Adding missing tests", "添加单测"),
            CommitType::Chore => (
                "Changes to the build process or auxiliary tools and libraries such as documentation generation",
                "对构建过程或辅助工具和库（例如文档生成）的更改",
            ),
            CommitType::Revert => ("Revert to a commit", "恢复至某次提交"),
            CommitType::Wip => ("Work in progress", "工作正在进行中"),
        };

        Descriptions { en, zh }
    }
}

impl Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CommitType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CommitType::EXTENDED
            .into_iter()
            .find(|kind| kind.name() == value)
            .ok_or_else(|| format!("Unknown commit type '{value}'"))
    }
}
