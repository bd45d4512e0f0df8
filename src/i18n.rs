//! Static UI strings keyed by locale.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Chinese (Simplified).
    Zh,
    #[default]
    En,
}

impl Locale {
    pub const fn all() -> [Self; 2] {
        [Self::Zh, Self::En]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Matches a language tag such as `zh-CN` or `en` on its primary subtag.
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        Self::all()
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(primary))
    }

    pub const fn system_instruction(self) -> &'static SystemInstructionStrings {
        match self {
            Self::Zh => &ZH,
            Self::En => &EN,
        }
    }

    pub const fn reset_confirm(self) -> &'static ResetConfirmStrings {
        match self {
            Self::Zh => &ZH_RESET,
            Self::En => &EN_RESET,
        }
    }
}

/// Labels for the system instruction dialog.
#[derive(Debug, PartialEq, Eq)]
pub struct SystemInstructionStrings {
    pub title: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub reset: &'static str,
    pub save: &'static str,
}

static ZH: SystemInstructionStrings = SystemInstructionStrings {
    title: "系统指令",
    label: "系统指令",
    placeholder: "输入系统指令，用于设定助手的角色和行为",
    reset: "重置",
    save: "保存",
};

static EN: SystemInstructionStrings = SystemInstructionStrings {
    title: "System Instruction",
    label: "System instruction",
    placeholder: "Enter a system instruction to set the assistant's role and behavior",
    reset: "Reset",
    save: "Save",
};

/// Labels for the dialog asking before the instruction is cleared.
#[derive(Debug, PartialEq, Eq)]
pub struct ResetConfirmStrings {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
}

static ZH_RESET: ResetConfirmStrings = ResetConfirmStrings {
    title: "重置系统指令",
    message: "确定要清空当前的系统指令吗？",
    confirm: "确定",
    cancel: "取消",
};

static EN_RESET: ResetConfirmStrings = ResetConfirmStrings {
    title: "Reset system instruction",
    message: "Clear the current system instruction?",
    confirm: "Reset",
    cancel: "Cancel",
};
