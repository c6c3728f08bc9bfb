use anyhow::Result;
use swc_common::{comments::SingleThreadedComments, sync::Lrc, FileName, SourceFile, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax, TsSyntax};

pub struct TypeScriptParser {
    pub source_map: Lrc<SourceMap>,
    pub comments: SingleThreadedComments,
}

impl TypeScriptParser {
    pub fn new() -> Self {
        Self {
            source_map: Lrc::new(SourceMap::default()),
            comments: SingleThreadedComments::default(),
        }
    }

    pub fn parse(&self, source: &str, filename: &str) -> Result<(Module, Lrc<SourceFile>)> {
        let fm = self.source_map.new_source_file(
            FileName::Custom(filename.to_string()).into(),
            source.to_string(),
        );

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: filename.ends_with(".tsx"),
            decorators: true,
            no_early_errors: true,
            ..Default::default()
        });

        let lexer = Lexer::new(
            syntax,
            Default::default(),
            StringInput::from(&*fm),
            Some(&self.comments),
        );

        let mut parser = Parser::new_from(lexer);

        let module = parser
            .parse_module()
            .map_err(|err| anyhow::anyhow!("Failed to parse {}: {:?}", filename, err))?;

        Ok((module, fm))
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}
