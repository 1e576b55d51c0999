use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "OCS答题系统API配置测试工具", long_about = None)]
pub struct Args {
    /// 配置文件路径，启动时尝试加载
    pub config: Option<PathBuf>,

    /// 请求超时时间（秒），0表示不限制
    #[arg(short, long, env = "API_TESTER_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// 打印调试日志
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
