//! 英语（美国）翻译

use super::keys::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Key Validator",
    },

    validator: ValidatorTexts {
        title: "SiliconFlow API Key Validator",
        key_label: "API Key",
        placeholder: "Enter your API Key",
        validate: "Validate Key",
        validating: "Validating...",
        error_title: "Error",
        result_title: "User Information",
        balance: "Balance:",
    },

    hints: HintTexts {
        validate: "Validate",
        clear: "Clear",
        mask: "Mask",
        language: "Language",
        theme: "Theme",
        quit: "Quit",
    },

    status: StatusTexts {
        key_masked: "API Key hidden",
        key_visible: "API Key visible",
        theme_switched: "Theme switched",
    },
};
