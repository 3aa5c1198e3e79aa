//! Inline stylesheet and scripts
//!
//! The effect script only mirrors the formulas in `core`; all parameters
//! come from the `data-*` JSON the server renders.

/// Marks the document as scripted before first paint
pub const HEAD_SCRIPT: &str = "document.documentElement.classList.add('js');";

pub const STYLES: &str = r#"
:root{--bg:#ffffff;--fg:#0f172a;--muted:#f1f5f9;--muted-fg:#64748b;--primary:#7c3aed;--primary-fg:#ffffff;--border:#e2e8f0;--radius:12px}
@media (prefers-color-scheme:dark){:root{--bg:#0b1020;--fg:#e2e8f0;--muted:#111827;--muted-fg:#94a3b8;--border:#1f2937}}
*{box-sizing:border-box}
html{scroll-behavior:smooth}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;background:var(--bg);color:var(--fg);line-height:1.6}
a{color:inherit}
img{max-width:100%;display:block}
.sr-only{position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0 0 0 0)}
.container{max-width:1200px;margin:0 auto;padding:0 1.5rem}
section{padding:5rem 0;position:relative;overflow:hidden}
section.muted{background:var(--muted)}
.accent{color:var(--primary)}
.center{text-align:center;margin-top:3rem}
.section-header{text-align:center;margin-bottom:3rem}
.section-heading{font-size:2.25rem;margin:0 0 1rem}
.lead{color:var(--muted-fg);max-width:42rem;margin:0 auto}
.button{display:inline-block;padding:.6rem 1.4rem;border-radius:999px;border:1px solid var(--primary);text-decoration:none;font-weight:600;cursor:pointer;font-size:1rem;background:none;color:var(--fg)}
.button.primary{background:var(--primary);color:var(--primary-fg)}
.button.secondary{background:var(--muted);border-color:var(--border)}
.button.small{padding:.3rem .9rem;font-size:.875rem}
.button.wide{width:100%}
.button[disabled]{opacity:.6;cursor:wait}
.pill{display:inline-block;padding:.2rem .75rem;border-radius:999px;background:var(--primary);color:var(--primary-fg);font-size:.8rem;margin:.2rem}
.pill.outline{background:none;color:var(--fg);border:1px solid var(--border)}
.grid{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fill,minmax(300px,1fr))}
.two-col{display:grid;gap:3rem;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));align-items:center}
.card{background:var(--bg);border:1px solid var(--border);border-radius:var(--radius);overflow:hidden;transition:transform .2s ease-out,box-shadow .2s}
.card:hover{box-shadow:0 12px 32px rgba(0,0,0,.12)}
.card-body{padding:1.5rem}
.card-stripe{height:6px;background:linear-gradient(90deg,var(--primary),#ec4899)}
.card-actions{display:flex;gap:.5rem;margin-top:1rem}
.tilt{transform-style:preserve-3d;will-change:transform}
.media{position:relative;aspect-ratio:16/10;overflow:hidden;background:var(--muted)}
.media .placeholder{position:absolute;inset:0;display:flex;align-items:center;justify-content:center;font-size:3rem;font-weight:700;color:var(--muted-fg)}
.media img{position:relative;width:100%;height:100%;object-fit:cover}
.overlay{position:absolute;inset:0;display:flex;gap:.5rem;align-items:center;justify-content:center;background:rgba(0,0,0,.55);opacity:0;transition:opacity .3s}
.project-media:hover .overlay{opacity:1}
.trophy{position:absolute;right:1rem;bottom:1rem;opacity:.2;font-size:2rem}
.card-body{position:relative}
.more{text-align:center;color:var(--muted-fg);margin-top:2rem}
.navbar{position:fixed;top:0;left:0;right:0;z-index:40;padding:1.25rem 0;transition:all .3s}
.navbar.condensed{padding:.6rem 0;background:color-mix(in srgb,var(--bg) 85%,transparent);backdrop-filter:blur(8px);box-shadow:0 1px 8px rgba(0,0,0,.08)}
.navbar-inner{display:flex;align-items:center;justify-content:space-between}
.brand{font-size:1.5rem;font-weight:700;text-decoration:none}
.nav-links{display:flex;gap:1.5rem}
.nav-links a{text-decoration:none;font-weight:500}
.nav-links a:hover{color:var(--primary)}
.mobile-menu{display:none}
.mobile-menu summary{list-style:none;cursor:pointer;font-size:1.5rem}
.mobile-menu nav{position:absolute;left:0;right:0;top:100%;display:flex;flex-direction:column;gap:1rem;padding:1.5rem;background:var(--bg)}
@media (max-width:768px){.nav-links{display:none}.mobile-menu{display:block}}
.hero{min-height:100vh;display:flex;align-items:center}
.hero-grid{display:grid;gap:3rem;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));align-items:center}
.hero h1{font-size:3rem;margin:.25rem 0}
.headline{font-size:1.75rem;margin:0 0 1rem}
.pitch{color:var(--muted-fg);font-size:1.1rem}
.cta-row{display:flex;flex-wrap:wrap;gap:1rem;margin-top:2rem}
.hero-portrait{position:relative;max-width:420px;margin:0 auto}
.hero-portrait .media{aspect-ratio:1;border-radius:50%;border:6px solid var(--primary)}
.badge-float{position:absolute;right:-.5rem;bottom:-.5rem;font-size:2.5rem;animation:float 3s ease-in-out infinite}
.blob{position:absolute;width:24rem;height:24rem;border-radius:50%;filter:blur(80px);opacity:.25;z-index:-1}
.blob-a{background:var(--primary);top:-6rem;left:-6rem}
.blob-b{background:#ec4899;bottom:-6rem;right:-6rem}
@keyframes float{50%{transform:translateY(-10px)}}
.typed{display:inline-block;overflow:hidden;white-space:nowrap;border-right:2px solid var(--primary);max-width:calc(var(--typed-chars) * 1ch)}
.js .typed{animation:typing var(--typed-duration) steps(var(--typed-chars)) both,caret 1s step-end infinite}
@keyframes typing{from{max-width:0}}
@keyframes caret{50%{border-color:transparent}}
.cube-frame{aspect-ratio:1;max-width:360px;margin:0 auto;border-radius:var(--radius);background:linear-gradient(135deg,var(--primary),#ec4899);display:flex;align-items:center;justify-content:center;position:relative;transition:transform .1s linear}
.cube-mark{font-size:5rem;font-weight:800;color:var(--primary-fg)}
.roles{margin-bottom:1rem}
.badges{display:flex;flex-wrap:wrap;margin-top:.5rem}
.link-arrow{display:inline-block;margin-top:1.5rem;color:var(--primary);font-weight:600;text-decoration:none}
.js .reveal{opacity:0;transform:translateY(var(--reveal-offset,20px))}
.js .reveal.in-view{animation:reveal var(--reveal-duration,.5s) ease-out var(--reveal-delay,0s) both}
@keyframes reveal{from{opacity:0;transform:translateY(var(--reveal-offset,20px))}to{opacity:1;transform:none}}
.js .reveal.tilt.in-view{animation-name:fade}
@keyframes fade{from{opacity:0}to{opacity:1}}
.js [data-parallax-index]{opacity:var(--px-opacity);transform:translateY(var(--px-shift))}
.filters{display:flex;flex-wrap:wrap;gap:.5rem;justify-content:center;margin-bottom:2rem;text-transform:capitalize}
.gallery-item{display:block;text-decoration:none;border-radius:var(--radius);overflow:hidden;background:var(--bg);border:1px solid var(--border)}
.caption{padding:1rem}
.caption h3{margin:0 0 .25rem;font-size:1.05rem}
.caption p{margin:0;color:var(--muted-fg);font-size:.9rem}
.empty{text-align:center;color:var(--muted-fg);padding:3rem 0}
.modal{position:fixed;inset:0;z-index:60;display:flex;align-items:center;justify-content:center;padding:1rem}
.modal-backdrop{position:absolute;inset:0;background:rgba(0,0,0,.8)}
.modal-panel{position:relative;max-width:56rem;width:100%;background:var(--bg);border-radius:var(--radius);overflow:hidden}
.modal-media{aspect-ratio:16/9}
.modal-media img{object-fit:contain}
.modal-body{padding:1.5rem}
.modal-footer{display:flex;justify-content:space-between;align-items:center;margin-top:1rem}
.service{padding:1.5rem}
.service-icon{font-size:2rem;width:3.5rem;height:3.5rem;display:flex;align-items:center;justify-content:center;border-radius:50%;background:var(--muted)}
.channels{list-style:none;padding:0;margin:0;display:grid;gap:1.25rem}
.channels li{display:flex;gap:1rem;align-items:flex-start}
.channels h4{margin:0}
.channels a{color:var(--muted-fg);text-decoration:none}
.channel-icon{font-size:1.5rem}
form label{display:block;font-weight:500;margin:1rem 0 .35rem}
form input,form textarea{width:100%;padding:.65rem .8rem;border:1px solid var(--border);border-radius:8px;background:var(--bg);color:var(--fg);font:inherit}
form button{margin-top:1.5rem}
.form-error{color:#dc2626;font-weight:500}
.footer{padding:3rem 0;border-top:1px solid var(--border)}
.footer-row{display:flex;flex-wrap:wrap;justify-content:space-between;align-items:center;gap:1rem}
.socials{display:flex;gap:.75rem}
.social-badge{display:inline-flex;width:2.5rem;height:2.5rem;border-radius:50%;align-items:center;justify-content:center;background:var(--muted);font-weight:700}
.back-to-top{text-align:center;margin-top:2rem}
.back-to-top a{color:var(--muted-fg);text-decoration:none}
.scroll-top{position:fixed;right:1.5rem;bottom:1.5rem;width:3rem;height:3rem;border-radius:50%;background:var(--primary);color:var(--primary-fg);display:flex;align-items:center;justify-content:center;text-decoration:none;opacity:0;pointer-events:none;transition:opacity .3s;z-index:30}
.scroll-top.visible{opacity:1;pointer-events:auto}
.toast{position:fixed;right:1.5rem;bottom:5.5rem;z-index:70;max-width:22rem;padding:1rem 1.25rem;border-radius:var(--radius);background:var(--fg);color:var(--bg);animation:toast 5s ease forwards}
.toast p{margin:.25rem 0 0}
@keyframes toast{0%{opacity:0;transform:translateY(10px)}8%,85%{opacity:1;transform:none}100%{opacity:0;visibility:hidden}}
@media (prefers-reduced-motion:reduce){*{animation:none!important;transition:none!important}.js .reveal,.js [data-parallax-index]{opacity:1;transform:none}}
"#;

pub const EFFECTS_SCRIPT: &str = r#"
(function(){
  var clamp=function(v,lo,hi){return Math.min(hi,Math.max(lo,v))};
  var tiltOf=function(p,e,r){
    var m=p.mapping;
    if(r.width<=0||r.height<=0)return null;
    if(m.mode==='normalized'){
      var x=(e.clientX-r.left)/r.width-0.5,y=(e.clientY-r.top)/r.height-0.5;
      return [-y*m.gain_deg,x*m.gain_deg];
    }
    var dx=clamp(e.clientX-(r.left+r.width/2),-m.range_px,m.range_px),dy=clamp(e.clientY-(r.top+r.height/2),-m.range_px,m.range_px);
    return [-dy/m.range_px*m.max_deg,dx/m.range_px*m.max_deg];
  };
  var rest=function(el,p){el.style.transform='perspective('+p.perspective_px+'px) rotateX(0deg) rotateY(0deg) translateZ(0px)'};
  document.querySelectorAll('[data-tilt]').forEach(function(el){
    var p=JSON.parse(el.dataset.tilt);
    rest(el,p);
    el.addEventListener('mousemove',function(e){
      var t=tiltOf(p,e,el.getBoundingClientRect());
      if(!t)return rest(el,p);
      el.style.transform='perspective('+p.perspective_px+'px) rotateX('+t[0].toFixed(2)+'deg) rotateY('+t[1].toFixed(2)+'deg) translateZ('+p.depth_px+'px)';
    });
    el.addEventListener('mouseleave',function(){rest(el,p)});
  });
  var listeners=[];
  var onScroll=function(fn){fn(window.scrollY);listeners.push(fn)};
  window.addEventListener('scroll',function(){var y=window.scrollY;listeners.forEach(function(fn){fn(y)})},{passive:true});
  document.querySelectorAll('[data-parallax]').forEach(function(sec){
    var p=JSON.parse(sec.dataset.parallax),items=sec.querySelectorAll('[data-parallax-index]');
    onScroll(function(){
      var vh=window.innerHeight,top=sec.getBoundingClientRect().top;
      var prog=vh>0?clamp(1-top/vh*p.entry_factor,0,1):0;
      items.forEach(function(el,i){
        var d=i*p.stagger;
        el.style.setProperty('--px-opacity',clamp(prog*p.opacity_gain-d,0,1).toFixed(3));
        el.style.setProperty('--px-shift',Math.max(0,p.base_offset_px-prog*p.travel_px-d*p.travel_px).toFixed(1)+'px');
      });
    });
  });
  document.querySelectorAll('[data-spin]').forEach(function(el){
    var k=parseFloat(el.dataset.spin);
    onScroll(function(y){
      var r=el.getBoundingClientRect();
      if(r.top<window.innerHeight&&r.bottom>0)el.style.transform='rotateY('+(y*k).toFixed(1)+'deg) rotateX('+(y*k/2).toFixed(1)+'deg)';
    });
  });
  var nav=document.getElementById('navbar'),top=document.getElementById('scroll-top');
  if(nav){var at=parseFloat(nav.dataset.condenseAt);onScroll(function(y){nav.classList.toggle('condensed',y>at);if(top)top.classList.toggle('visible',y>300)})}
  var io=new IntersectionObserver(function(es){es.forEach(function(e){if(e.isIntersecting){e.target.classList.add('in-view');io.unobserve(e.target)}})},{rootMargin:'0px 0px -10% 0px'});
  document.querySelectorAll('.reveal').forEach(function(el){io.observe(el)});
  var form=document.getElementById('contact-form');
  if(form)form.addEventListener('submit',function(){var b=form.querySelector('button[type=submit]');b.disabled=true;b.textContent='Sending...'});
})();
"#;
