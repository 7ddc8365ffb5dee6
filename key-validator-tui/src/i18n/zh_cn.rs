//! 简体中文翻译

use super::keys::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "密钥校验",
    },

    validator: ValidatorTexts {
        title: "SiliconFlow API Key 校验",
        key_label: "API Key",
        placeholder: "请输入 API Key",
        validate: "校验密钥",
        validating: "校验中...",
        error_title: "错误",
        result_title: "用户信息",
        balance: "余额:",
    },

    hints: HintTexts {
        validate: "校验",
        clear: "清空",
        mask: "隐藏",
        language: "语言",
        theme: "主题",
        quit: "退出",
    },

    status: StatusTexts {
        key_masked: "已隐藏 API Key",
        key_visible: "已显示 API Key",
        theme_switched: "已切换主题",
    },
};
