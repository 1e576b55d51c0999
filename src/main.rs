use api_config_tester::core::prompt::StdinAnswers;
use api_config_tester::core::send_request::build_client;
use api_config_tester::core::session::Session;
use api_config_tester::logger::init_logging;
use api_config_tester::models::args::Args;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("{}", "=".repeat(60));
    println!("OCS答题系统API配置测试工具");
    println!("{}", "=".repeat(60));

    let client = build_client(args.timeout)?;
    let mut session = Session::new(StdinAnswers, client);

    // 启动参数给了配置文件就先尝试加载
    if let Some(path) = &args.config {
        println!("尝试加载配置文件: {}", path.display());
        if !session.load_from(path) {
            println!("配置文件加载失败，将使用手动输入模式");
        }
    }

    session.run().await
}
