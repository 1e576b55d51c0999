use std::path::Path;

use reqwest::Client;
use tracing::debug;

use crate::core::build_request::build;
use crate::core::display::{render_config, render_normalized, render_response, to_config_text};
use crate::core::load_config::load_config;
use crate::core::manual_input::{input_config, input_test_params};
use crate::core::parse_response::normalize;
use crate::core::prompt::AnswerSource;
use crate::core::send_request::send_request;
use crate::error::{ParseError, PromptError};
use crate::models::endpoint_config::EndpointConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// 一次交互测试会话，同一时间只持有一份配置
pub struct Session<A: AnswerSource> {
    answers: A,
    client: Client,
    config: Option<EndpointConfig>,
}

impl<A: AnswerSource> Session<A> {
    pub fn new(answers: A, client: Client) -> Self {
        Session {
            answers,
            client,
            config: None,
        }
    }

    pub fn config(&self) -> Option<&EndpointConfig> {
        self.config.as_ref()
    }

    pub fn answers(&self) -> &A {
        &self.answers
    }

    /// 从文件加载配置，成功时整体替换当前配置；失败时保留原配置
    pub fn load_from(&mut self, path: &Path) -> bool {
        match load_config(path) {
            Ok(config) => {
                println!("✓ 成功加载API配置文件");
                self.config = Some(config);
                true
            }
            Err(err) => {
                println!("✗ {}", err);
                if let ParseError::JsonDecode { .. } = err {
                    println!("请确保配置文件是有效的JSON格式");
                }
                false
            }
        }
    }

    /// 运行菜单直到选择退出或输入结束
    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.run_menus().await {
            Ok(()) | Err(PromptError::Closed) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn run_menus(&mut self) -> Result<(), PromptError> {
        // 没有配置前只能加载或手动输入
        while self.config.is_none() {
            if self.setup_menu()? == Flow::Exit {
                return Ok(());
            }
        }
        self.display_config();

        // 进入测试循环
        while self.test_menu().await? == Flow::Continue {}
        Ok(())
    }

    fn setup_menu(&mut self) -> Result<Flow, PromptError> {
        println!("\n请选择操作:");
        println!("1. 从文件加载配置");
        println!("2. 手动输入配置");
        println!("3. 退出");

        let choice = self.answers.ask("请输入选择 (1-3): ")?;
        match choice.trim() {
            "1" => {
                // 加载失败时继续停留在菜单
                self.ask_and_load()?;
            }
            "2" => {
                self.config = Some(input_config(&mut self.answers)?);
            }
            "3" => {
                println!("退出程序");
                return Ok(Flow::Exit);
            }
            _ => println!("无效选择，请重新输入"),
        }
        Ok(Flow::Continue)
    }

    async fn test_menu(&mut self) -> Result<Flow, PromptError> {
        println!("\n{}", "=".repeat(40));
        println!("测试选项:");
        println!("1. 发送测试请求");
        println!("2. 重新输入测试参数");
        println!("3. 重新加载配置");
        println!("4. 显示当前配置");
        println!("5. 退出");

        let choice = self.answers.ask("请选择操作 (1-5): ")?;
        match choice.trim() {
            "1" => self.send_test().await?,
            "2" => println!("请使用选项1来输入测试参数并发送请求"),
            "3" => {
                if self.ask_and_load()? {
                    self.display_config();
                }
            }
            "4" => self.display_config(),
            "5" => {
                println!("退出程序");
                return Ok(Flow::Exit);
            }
            _ => println!("无效选择，请重新输入"),
        }
        Ok(Flow::Continue)
    }

    fn ask_and_load(&mut self) -> Result<bool, PromptError> {
        let answer = self.answers.ask("请输入配置文件路径: ")?;
        let path = Path::new(answer.trim());
        // 文件不存在时不尝试读取
        if !path.exists() {
            println!("✗ 文件不存在");
            return Ok(false);
        }
        Ok(self.load_from(path))
    }

    fn display_config(&self) {
        match &self.config {
            Some(config) => {
                println!("{}", render_config(config));
                // 单行JSON可以直接保存为配置文件
                match to_config_text(config) {
                    Ok(text) => println!("配置JSON: {}", text),
                    Err(err) => debug!(error = %err, "序列化配置失败"),
                }
            }
            None => println!("✗ 没有加载配置"),
        }
    }

    async fn send_test(&mut self) -> Result<(), PromptError> {
        // 获取测试参数
        let params = input_test_params(&mut self.answers)?;
        let Some(config) = &self.config else {
            println!("✗ 没有加载配置");
            return Ok(());
        };

        // 构建请求URL
        let request = match build(config, &params) {
            Ok(request) => request,
            Err(err) => {
                println!("✗ 构建请求时出错: {}", err);
                return Ok(());
            }
        };
        println!("\n构建的请求URL: {}", request.url);
        println!("\n正在发送请求到: {}", request.url);

        // 发送请求，失败时没有可解析的响应
        let payload = match send_request(&self.client, &request).await {
            Ok(response) => {
                println!("{}", render_response(&response));
                Some(response.body)
            }
            Err(err) => {
                println!("✗ {}", err);
                None
            }
        };

        // 解析响应
        match normalize(payload.as_ref()) {
            Some(result) => println!("{}", render_normalized(&result)),
            None => debug!("响应没有可解析的内容"),
        }
        Ok(())
    }
}
