//! 页面数据状态

mod validator;

pub use validator::{
    ValidatorState, ViewPhase, MSG_GENERIC_FAILURE, MSG_INVALID_KEY, MSG_KEY_REQUIRED,
};
