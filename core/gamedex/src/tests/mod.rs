//! アプリレベルのテスト（Stubアダプタ駆動）

mod runner_tests;
