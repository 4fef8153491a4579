//! Statement productions: `seleccion`, `iteracion`, `repeticion`, `sent_in`,
//! `sent_out`, `asignacion`, `incremento_decremento` (spec.md §4.2).

use crate::ast::{AstNode, NodeKind};
use crate::parser::{Parser, SYNC_STMT};
use triac_lex::TokenKind;

/// `stmt_list := { stmt }`, stopping at `}`, `end`, `else`, or `until` — the
/// same follow set the teacher's draft checks, since those four tokens can
/// only ever close an enclosing construct.
pub(crate) fn stmt_list(p: &mut Parser, list: &mut AstNode) {
    while !p.at_end()
        && !p.check("}")
        && !p.check("end")
        && !p.check("else")
        && !p.check("until")
    {
        if p.check(";") {
            p.report_unexpected("lista_sentencias");
            p.advance();
            continue;
        }

        let before = p.position();
        match stmt(p) {
            Some(node) => list.push_child(node),
            None => {
                if p.position() == before {
                    p.synchronize(SYNC_STMT);
                    if p.position() == before {
                        p.advance();
                    }
                }
            }
        }
    }
}

/// `stmt := selection | iteration | repetition | sent_in | sent_out | assignment`
fn stmt(p: &mut Parser) -> Option<AstNode> {
    if p.check("if") {
        return selection(p);
    }
    if p.check("while") {
        return iteration(p);
    }
    if p.check("do") {
        return repetition(p);
    }
    if p.check("cin") {
        return Some(sent_in(p));
    }
    if p.check("cout") {
        return Some(sent_out(p));
    }
    if p.check_kind(TokenKind::Identifier) {
        return match p.peek_next() {
            Some(next) if next.lexeme == "=" => assignment(p),
            Some(next) if next.lexeme == "++" || next.lexeme == "--" => Some(inc_dec(p)),
            _ => {
                p.report_unexpected("sentencia");
                p.advance();
                None
            }
        };
    }
    p.report_unexpected("sentencia");
    None
}

/// `selection := 'if' expr 'then' stmt_list [ 'else' stmt_list ] 'end'`
fn selection(p: &mut Parser) -> Option<AstNode> {
    let if_tok = p.expect("if")?;
    let mut node = AstNode::new(NodeKind::Seleccion).at(if_tok.pos);

    let Some(cond_expr) = crate::expr::expr(p) else {
        p.report_unexpected("condición del if");
        return Some(node);
    };
    node.push_child(AstNode::new(NodeKind::Condicion).with_child(cond_expr));

    if p.expect("then").is_none() {
        p.synchronize(SYNC_STMT);
        return Some(node);
    }

    let mut bloque_if = AstNode::new(NodeKind::BloqueIf);
    stmt_list(p, &mut bloque_if);
    node.push_child(bloque_if);

    if p.eat("else").is_some() {
        let mut bloque_else = AstNode::new(NodeKind::BloqueElse);
        stmt_list(p, &mut bloque_else);
        node.push_child(bloque_else);
    }

    if p.expect("end").is_none() {
        p.synchronize(SYNC_STMT);
    }

    Some(node)
}

/// `iteration := 'while' expr stmt_list 'end'`
fn iteration(p: &mut Parser) -> Option<AstNode> {
    let while_tok = p.expect("while")?;
    let mut node = AstNode::new(NodeKind::Iteracion).at(while_tok.pos);

    let Some(cond_expr) = crate::expr::expr(p) else {
        p.report_unexpected("condición del while");
        return Some(node);
    };
    node.push_child(AstNode::new(NodeKind::Condicion).with_child(cond_expr));

    let mut bloque = AstNode::new(NodeKind::BloqueWhile);
    stmt_list(p, &mut bloque);
    node.push_child(bloque);

    if p.expect("end").is_none() {
        p.synchronize(SYNC_STMT);
    }

    Some(node)
}

/// `repetition := 'do' stmt_list ('while' | 'until') expr`
fn repetition(p: &mut Parser) -> Option<AstNode> {
    let do_tok = p.expect("do")?;
    let mut node = AstNode::new(NodeKind::Repeticion).at(do_tok.pos);

    let mut bloque = AstNode::new(NodeKind::BloqueDo);
    stmt_list(p, &mut bloque);
    node.push_child(bloque);

    if p.check("while") || p.check("until") {
        let kind_tok = p.advance().expect("checked above");
        let kind = kind_tok.lexeme.clone();
        match crate::expr::expr(p) {
            Some(cond_expr) => {
                node.push_child(
                    AstNode::new(NodeKind::Condicion)
                        .with_value(kind)
                        .with_child(cond_expr),
                );
            }
            None => p.report_unexpected("condición del do"),
        }
    } else {
        p.report_unexpected("'while' o 'until' tras el bloque do");
    }

    Some(node)
}

/// `sent_in := 'cin' '>>' IDENT ';'`
fn sent_in(p: &mut Parser) -> AstNode {
    let cin_tok = p.expect("cin");
    let mut node = AstNode::new(NodeKind::SentIn);
    if let Some(t) = cin_tok {
        node.pos = Some(t.pos);
    }

    if p.expect(">>").is_none() {
        p.synchronize(&[";"]);
        return node;
    }

    match p.expect_identifier() {
        Some(id) => node.push_child(AstNode::leaf(NodeKind::Id, id.lexeme.clone()).at(id.pos)),
        None => {
            p.synchronize(&[";"]);
            return node;
        }
    }

    if p.expect(";").is_none() {
        p.synchronize(SYNC_STMT);
    }

    node
}

/// `sent_out := 'cout' '<<' output ';'`
fn sent_out(p: &mut Parser) -> AstNode {
    p.expect("cout");
    let mut node = AstNode::new(NodeKind::SentOut);

    if p.expect("<<").is_none() {
        p.synchronize(&[";"]);
        return node;
    }

    if let Some(salida) = output(p) {
        node.push_child(salida);
    }

    if p.expect(";").is_none() {
        p.synchronize(SYNC_STMT);
    }

    node
}

/// `output := (STRING | expr) [ '<<' (STRING | expr) ]` — a second `<<`
/// segment chains onto the same `salida` node (`cout << "n=" << n;`).
fn output(p: &mut Parser) -> Option<AstNode> {
    let mut node = AstNode::new(NodeKind::Salida);
    if let Some(segment) = output_segment(p) {
        node.push_child(segment);
    }
    if p.eat("<<").is_some() {
        if let Some(segment) = output_segment(p) {
            node.push_child(segment);
        }
    }
    Some(node)
}

fn output_segment(p: &mut Parser) -> Option<AstNode> {
    if p.check_kind(TokenKind::StringLiteral) {
        let tok = p.advance().expect("checked above");
        return Some(AstNode::leaf(NodeKind::Cadena, tok.lexeme.clone()).at(tok.pos));
    }
    crate::expr::expr(p)
}

/// `assignment := IDENT '=' (expr ';' | ';')`
fn assignment(p: &mut Parser) -> Option<AstNode> {
    let id_tok = p.expect_identifier()?;
    let mut node = AstNode::new(NodeKind::Asignacion)
        .with_value(id_tok.lexeme.clone())
        .at(id_tok.pos);

    if p.expect("=").is_none() {
        p.synchronize(&[";"]);
        return Some(node);
    }

    if p.eat(";").is_some() {
        node.push_child(AstNode::new(NodeKind::ExpresionVacia));
        return Some(node);
    }

    match crate::expr::expr(p) {
        Some(expr) => node.push_child(expr),
        None => p.report_unexpected("expresión tras '='"),
    }

    if p.expect(";").is_none() {
        p.synchronize(SYNC_STMT);
    }

    Some(node)
}

/// `a++;` / `a--;` desugars to `a = a + 1;` / `a = a - 1;` at parse time, the
/// same implicit-assignment shape the teacher's draft builds by hand.
fn inc_dec(p: &mut Parser) -> AstNode {
    let id_tok = p.expect_identifier().expect("checked by caller");
    let mut node = AstNode::new(NodeKind::Asignacion)
        .with_value(id_tok.lexeme.clone())
        .at(id_tok.pos);

    let op = if p.eat("++").is_some() {
        "+"
    } else {
        p.expect("--");
        "-"
    };

    let expr = AstNode::new(NodeKind::SumaOp)
        .with_value(op)
        .with_child(AstNode::leaf(NodeKind::Id, id_tok.lexeme.clone()).at(id_tok.pos))
        .with_child(AstNode::leaf(NodeKind::Numero, "1"));
    node.push_child(expr);

    if p.expect(";").is_none() {
        p.synchronize(SYNC_STMT);
    }

    node
}
